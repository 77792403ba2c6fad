use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TaskPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AnnouncementKind {
    #[default]
    General,
    Exam,
    Assignment,
    Event,
}

impl AnnouncementKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            AnnouncementKind::General => "general",
            AnnouncementKind::Exam => "exam",
            AnnouncementKind::Assignment => "assignment",
            AnnouncementKind::Event => "event",
        }
    }
}
