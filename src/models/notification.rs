use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub text: String,
    /// Display string, e.g. "2 hours ago".
    pub time: String,
    pub read: bool,
}

impl Notification {
    pub fn new(id: &str, text: &str, time: &str, read: bool) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            time: time.to_string(),
            read,
        }
    }
}

pub fn has_unread(notifications: &[Notification]) -> bool {
    notifications.iter().any(|n| !n.read)
}
