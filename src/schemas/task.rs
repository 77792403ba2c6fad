use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::core::time::format_offset;
use crate::db::models::Task;
use crate::db::types::TaskPriority;

pub(crate) const DEFAULT_COURSE: &str = "General";

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskCreate {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) course: Option<String>,
    #[serde(default)]
    pub(crate) priority: Option<TaskPriority>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) user_id: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub(crate) due_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub(crate) notification_id: Option<i32>,
}

impl TaskCreate {
    /// Empty strings count as absent, like the missing field itself.
    pub(crate) fn course_or_default(&self) -> &str {
        self.course.as_deref().filter(|course| !course.is_empty()).unwrap_or(DEFAULT_COURSE)
    }

    pub(crate) fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    pub(crate) fn notification_id(&self) -> Option<i32> {
        self.notification_id.filter(|id| *id != 0)
    }
}

/// Partial task update: every `None` keeps the stored value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskPatch {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) course: Option<String>,
    #[serde(default)]
    pub(crate) priority: Option<TaskPriority>,
    #[serde(default)]
    pub(crate) completed: Option<bool>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub(crate) due_date: Option<OffsetDateTime>,
}

impl TaskPatch {
    pub(crate) fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(course) = self.course {
            task.course = Some(course);
        }
        if let Some(priority) = self.priority {
            task.priority = Some(priority.as_str().to_string());
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(due_date) = self.due_date {
            task.due_date = Some(due_date);
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskResponse {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) course: Option<String>,
    pub(crate) priority: Option<String>,
    pub(crate) completed: bool,
    pub(crate) description: Option<String>,
    pub(crate) user_id: Option<String>,
    pub(crate) due_date: Option<String>,
    pub(crate) notification_id: Option<i32>,
}

impl TaskResponse {
    pub(crate) fn from_db(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            course: task.course,
            priority: task.priority,
            completed: task.completed,
            description: task.description,
            user_id: task.user_id,
            due_date: task.due_date.map(format_offset),
            notification_id: task.notification_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TaskBody {
    pub(crate) task: TaskResponse,
}

#[derive(Debug, Serialize)]
pub(crate) struct TaskList {
    pub(crate) tasks: Vec<TaskResponse>,
}
