use crate::fixtures;
use crate::models::{Message, TranscriptLine};

/// Instructor messaging panel state. Sending never stores anything; it only
/// clears the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    selected: u32,
    draft: String,
}

impl Default for Inbox {
    fn default() -> Self {
        let selected = fixtures::MESSAGES.first().map(|m| m.id).unwrap_or_default();
        Self {
            selected,
            draft: String::new(),
        }
    }
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> u32 {
        self.selected
    }

    pub fn selected_contact(&self) -> Option<&'static Message> {
        fixtures::find_message(self.selected)
    }

    pub fn transcript(&self) -> Vec<TranscriptLine> {
        fixtures::transcript(self.selected)
    }

    pub fn select(&mut self, contact_id: u32) {
        self.selected = contact_id;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Returns whether anything was "sent". Blank drafts are left untouched.
    pub fn send(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            log::trace!("empty message ignored");
            return false;
        }
        log::debug!("message to contact {} sent (not stored)", self.selected);
        self.draft.clear();
        true
    }
}
