use serde::{Deserialize, Serialize};

/// Inbox entry shown in the instructor's contact list.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub student: String,
    pub message: String,
    pub time: String,
    pub unread: bool,
}

impl Message {
    pub fn new(id: u32, student: &str, message: &str, time: &str, unread: bool) -> Self {
        Self {
            id,
            student: student.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            unread,
        }
    }

    /// Two-letter avatar text, e.g. "AS" for "Alice Smith".
    pub fn avatar(&self) -> String {
        crate::models::initials(&self.student)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub from_instructor: bool,
    pub text: String,
}

impl TranscriptLine {
    pub fn instructor(text: &str) -> Self {
        Self {
            from_instructor: true,
            text: text.to_string(),
        }
    }

    pub fn student(text: &str) -> Self {
        Self {
            from_instructor: false,
            text: text.to_string(),
        }
    }
}
