use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_offset;
use crate::db::models::Announcement;
use crate::db::types::AnnouncementKind;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnnouncementCreate {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default, rename = "type")]
    pub(crate) kind: Option<AnnouncementKind>,
    #[serde(default)]
    pub(crate) course_id: Option<String>,
}

/// Listed with the storage column names (`is_read`, `course_id`).
#[derive(Debug, Serialize)]
pub(crate) struct AnnouncementResponse {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) message: Option<String>,
    pub(crate) date: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) is_read: bool,
    pub(crate) course_id: Option<String>,
}

impl AnnouncementResponse {
    pub(crate) fn from_db(announcement: Announcement) -> Self {
        Self {
            id: announcement.id,
            title: announcement.title,
            message: announcement.message,
            date: format_offset(announcement.date),
            kind: announcement.kind,
            is_read: announcement.is_read,
            course_id: announcement.course_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AnnouncementList {
    pub(crate) announcements: Vec<AnnouncementResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn create_defaults_to_general() {
        let payload: AnnouncementCreate =
            serde_json::from_value(json!({ "title": "Welcome" })).unwrap();
        assert_eq!(payload.kind.unwrap_or_default(), AnnouncementKind::General);
    }

    #[test]
    fn create_rejects_unknown_type() {
        let result = serde_json::from_value::<AnnouncementCreate>(
            json!({ "title": "Party", "type": "party" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn response_keeps_column_names() {
        let value = serde_json::to_value(AnnouncementResponse::from_db(Announcement {
            id: "1".to_string(),
            title: "Midterm moved".to_string(),
            message: None,
            date: datetime!(2025-04-01 10:00 UTC),
            kind: "exam".to_string(),
            is_read: true,
            course_id: Some("2".to_string()),
        }))
        .unwrap();

        assert_eq!(value["type"], "exam");
        assert_eq!(value["is_read"], true);
        assert_eq!(value["course_id"], "2");
        assert!(value.get("isRead").is_none());
        assert_eq!(value["date"], "2025-04-01T10:00:00Z");
    }
}
