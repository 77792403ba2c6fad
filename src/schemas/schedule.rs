use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::core::time::format_offset;
use crate::db::models::ScheduleEvent;

pub(crate) const DEFAULT_EVENT_TYPE: &str = "lecture";

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduleEventCreate {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub(crate) title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub(crate) start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub(crate) end_time: OffsetDateTime,
    #[serde(default)]
    pub(crate) location: Option<String>,
    #[serde(default)]
    pub(crate) instructor: Option<String>,
    #[serde(default)]
    pub(crate) course_id: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default, rename = "type")]
    pub(crate) kind: Option<String>,
}

impl ScheduleEventCreate {
    pub(crate) fn kind_or_default(&self) -> &str {
        self.kind.as_deref().filter(|kind| !kind.is_empty()).unwrap_or(DEFAULT_EVENT_TYPE)
    }
}

/// Listed with the storage column names (`start_time`, `course_id`, ...).
#[derive(Debug, Serialize)]
pub(crate) struct ScheduleEventResponse {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) location: Option<String>,
    pub(crate) instructor: Option<String>,
    pub(crate) course_id: Option<String>,
    pub(crate) description: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: String,
}

impl ScheduleEventResponse {
    pub(crate) fn from_db(event: ScheduleEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            start_time: format_offset(event.start_time),
            end_time: format_offset(event.end_time),
            location: event.location,
            instructor: event.instructor,
            course_id: event.course_id,
            description: event.description,
            kind: event.kind.unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ScheduleList {
    pub(crate) events: Vec<ScheduleEventResponse>,
}
