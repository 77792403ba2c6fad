use serde::Serialize;

pub(crate) mod announcement;
pub(crate) mod auth;
pub(crate) mod course;
pub(crate) mod schedule;
pub(crate) mod task;
pub(crate) mod user;

/// `{"success": true, ...body}`. Failures never use this type; see `ApiError`.
#[derive(Debug, Serialize)]
pub(crate) struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T> Success<T> {
    pub(crate) fn new(body: T) -> Self {
        Self { success: true, body }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Ack {}

pub(crate) fn ack() -> Success<Ack> {
    Success::new(Ack {})
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageBody {
    pub(crate) message: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatedId {
    pub(crate) id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_flattens_body() {
        let value = serde_json::to_value(Success::new(CreatedId { id: "42".to_string() })).unwrap();
        assert_eq!(value, json!({ "success": true, "id": "42" }));
    }

    #[test]
    fn ack_is_bare_success() {
        assert_eq!(serde_json::to_value(ack()).unwrap(), json!({ "success": true }));
    }
}
