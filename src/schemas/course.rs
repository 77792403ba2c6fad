use serde::Serialize;
use serde_json::Value;
use sqlx::types::Json;

use crate::db::models::Course;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CourseResponse {
    pub(crate) id: String,
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) category: Option<String>,
    pub(crate) credit_hours: Option<i32>,
    pub(crate) description: Option<String>,
    pub(crate) professors: Value,
    pub(crate) schedule: Value,
    pub(crate) content: Value,
    pub(crate) assignments: Value,
    pub(crate) exams: Value,
}

impl CourseResponse {
    pub(crate) fn from_db(course: Course) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
            category: course.category,
            credit_hours: course.credit_hours,
            description: course.description,
            professors: document(course.professors),
            schedule: document(course.schedule),
            content: document(course.content),
            assignments: document(course.assignments),
            exams: document(course.exams),
        }
    }
}

/// A NULL document column reads back as an empty sequence.
fn document(value: Option<Json<Value>>) -> Value {
    match value {
        Some(Json(Value::Null)) | None => Value::Array(Vec::new()),
        Some(Json(value)) => value,
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CourseBody {
    pub(crate) course: CourseResponse,
}

#[derive(Debug, Serialize)]
pub(crate) struct CourseList {
    pub(crate) courses: Vec<CourseResponse>,
}
