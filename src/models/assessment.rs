use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum AssessmentKind {
    Exam,
    Assignment,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    #[default]
    Pending,
    Submitted,
}

impl AssessmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exam => "Exam",
            Self::Assignment => "Assignment",
        }
    }

    /// Label of the button that starts this kind of assessment.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Exam => "Start Exam",
            Self::Assignment => "Upload Assignment",
        }
    }

    /// Toast shown once the action has been triggered.
    pub fn started_message(&self) -> &'static str {
        match self {
            Self::Exam => "Exam Started",
            Self::Assignment => "Assignment Upload Started",
        }
    }
}

impl std::fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: u32,
    pub title: String,
    pub course: String,
    pub kind: AssessmentKind,
    pub due: String,
    pub status: AssessmentStatus,
}

impl Assessment {
    pub fn new(
        id: u32,
        title: &str,
        course: &str,
        kind: AssessmentKind,
        due: &str,
        status: AssessmentStatus,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            course: course.to_string(),
            kind,
            due: due.to_string(),
            status,
        }
    }
}
