use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) avatar: Option<String>,
    pub(crate) student_id: Option<String>,
    pub(crate) major: Option<String>,
    pub(crate) department: Option<String>,
    pub(crate) program: Option<String>,
    pub(crate) gpa: Option<f64>,
    pub(crate) level: Option<i32>,
    pub(crate) mode: Option<String>,
    pub(crate) is_verified: bool,
    pub(crate) is_onboarding_complete: bool,
    pub(crate) enrolled_courses: Option<Vec<String>>,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub(crate) struct Task {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) course: Option<String>,
    pub(crate) priority: Option<String>,
    pub(crate) completed: bool,
    pub(crate) description: Option<String>,
    pub(crate) user_id: Option<String>,
    pub(crate) due_date: Option<OffsetDateTime>,
    pub(crate) notification_id: Option<i32>,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct VerificationCode {
    pub(crate) id: i64,
    pub(crate) email: String,
    pub(crate) code: String,
    #[sqlx(rename = "type")]
    pub(crate) kind: String,
    pub(crate) expires_at: OffsetDateTime,
    pub(crate) used: bool,
    pub(crate) created_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct Announcement {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) message: Option<String>,
    pub(crate) date: OffsetDateTime,
    #[sqlx(rename = "type")]
    pub(crate) kind: String,
    pub(crate) is_read: bool,
    pub(crate) course_id: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct ScheduleEvent {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) start_time: OffsetDateTime,
    pub(crate) end_time: OffsetDateTime,
    pub(crate) location: Option<String>,
    pub(crate) instructor: Option<String>,
    pub(crate) course_id: Option<String>,
    pub(crate) description: Option<String>,
    #[sqlx(rename = "type")]
    pub(crate) kind: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct Course {
    pub(crate) id: String,
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) category: Option<String>,
    pub(crate) credit_hours: Option<i32>,
    pub(crate) description: Option<String>,
    pub(crate) professors: Option<Json<Value>>,
    pub(crate) schedule: Option<Json<Value>>,
    pub(crate) content: Option<Json<Value>>,
    pub(crate) assignments: Option<Json<Value>>,
    pub(crate) exams: Option<Json<Value>>,
}
