use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::User;

const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/?name=";
const DEFAULT_MODE: &str = "student";

/// Full replacement of the profile fields; absent values are written as NULL
/// (or false / empty for the flag and course list). `program` is the
/// exception and keeps its stored value when absent.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) avatar: Option<String>,
    #[serde(default)]
    pub(crate) major: Option<String>,
    #[serde(default)]
    pub(crate) department: Option<String>,
    #[serde(default)]
    pub(crate) program: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 9.99, message = "gpa must be between 0 and 9.99"))]
    pub(crate) gpa: Option<f64>,
    #[serde(default)]
    pub(crate) level: Option<i32>,
    #[serde(default)]
    pub(crate) mode: Option<String>,
    #[serde(default)]
    pub(crate) is_onboarding_complete: Option<bool>,
    #[serde(default)]
    pub(crate) enrolled_courses: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) avatar: Option<String>,
    pub(crate) student_id: Option<String>,
    pub(crate) major: Option<String>,
    pub(crate) department: Option<String>,
    pub(crate) program: Option<String>,
    pub(crate) gpa: Option<f64>,
    pub(crate) level: Option<i32>,
    pub(crate) mode: String,
    pub(crate) is_verified: bool,
    pub(crate) is_onboarding_complete: bool,
    pub(crate) enrolled_courses: Vec<String>,
}

impl UserResponse {
    pub(crate) fn from_db(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            student_id: user.student_id,
            major: user.major,
            department: user.department,
            program: user.program,
            gpa: user.gpa,
            level: user.level,
            mode: user.mode.unwrap_or_else(|| DEFAULT_MODE.to_string()),
            is_verified: user.is_verified,
            is_onboarding_complete: user.is_onboarding_complete,
            enrolled_courses: normalize_enrolled_courses(user.enrolled_courses.unwrap_or_default()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UserBody {
    pub(crate) user: Option<UserResponse>,
}

pub(crate) fn default_mode() -> &'static str {
    DEFAULT_MODE
}

/// Keeps order and drops blank entries.
pub(crate) fn normalize_enrolled_courses(courses: Vec<String>) -> Vec<String> {
    courses.into_iter().filter(|course| !course.is_empty()).collect()
}

pub(crate) fn student_id_for(user_id: &str) -> String {
    format!("STU{user_id}")
}

pub(crate) fn avatar_url(name: &str) -> String {
    format!("{AVATAR_BASE_URL}{}", encode_uri_component(name))
}

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::OffsetDateTime;

    fn stored_user() -> User {
        let now = OffsetDateTime::now_utc();
        User {
            id: "1700000000000".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            avatar: None,
            student_id: Some("STU1700000000000".to_string()),
            major: None,
            department: None,
            program: None,
            gpa: None,
            level: None,
            mode: None,
            is_verified: false,
            is_onboarding_complete: false,
            enrolled_courses: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn missing_collections_and_mode_get_defaults() {
        let value = serde_json::to_value(UserResponse::from_db(stored_user())).unwrap();
        assert_eq!(value["enrolledCourses"], json!([]));
        assert_eq!(value["mode"], "student");
        assert_eq!(value["gpa"], serde_json::Value::Null);
        assert_eq!(value["studentId"], "STU1700000000000");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn enrolled_courses_keep_order_without_blanks() {
        let mut user = stored_user();
        user.enrolled_courses =
            Some(vec!["MATH101".to_string(), String::new(), "COMP101".to_string()]);
        user.gpa = Some(3.5);

        let response = UserResponse::from_db(user);
        assert_eq!(response.enrolled_courses, vec!["MATH101", "COMP101"]);
        assert_eq!(response.gpa, Some(3.5));
    }

    #[test]
    fn avatar_url_encodes_like_encode_uri_component() {
        assert_eq!(avatar_url("Ada Lovelace"), "https://ui-avatars.com/api/?name=Ada%20Lovelace");
        assert_eq!(avatar_url("O'Neil (Jr.)"), "https://ui-avatars.com/api/?name=O'Neil%20(Jr.)");
        assert_eq!(avatar_url("a&b=c"), "https://ui-avatars.com/api/?name=a%26b%3Dc");
        assert_eq!(avatar_url("Łukasz"), "https://ui-avatars.com/api/?name=%C5%81ukasz");
        assert_eq!(avatar_url("a-b_c.d!e~f*g"), "https://ui-avatars.com/api/?name=a-b_c.d!e~f*g");
        assert_eq!(avatar_url("x/y?z#"), "https://ui-avatars.com/api/?name=x%2Fy%3Fz%23");
    }

    #[test]
    fn update_payload_reads_camel_case() {
        let payload: UserUpdate = serde_json::from_value(json!({
            "name": "Ada",
            "isOnboardingComplete": true,
            "enrolledCourses": ["COMP101"],
            "gpa": 3.75
        }))
        .unwrap();
        assert_eq!(payload.is_onboarding_complete, Some(true));
        assert_eq!(payload.enrolled_courses, Some(vec!["COMP101".to_string()]));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn update_payload_rejects_out_of_range_gpa() {
        let payload: UserUpdate =
            serde_json::from_value(json!({ "name": "Ada", "gpa": 12.0 })).unwrap();
        assert!(payload.validate().is_err());
    }
}
