//! View identifiers.
//!
//! `ViewId` is the flat set of every panel the portal knows about; the session
//! stores one of these. Each role renderer narrows it into its own closed enum
//! and matches exhaustively. An id with no counterpart in the role's enum is a
//! "not found" view, never an error.

use serde::{Deserialize, Serialize};

use crate::common::ParseError;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    #[default]
    Dashboard,
    Catalog,
    CoursePlayer,
    Assessments,
    Profile,
    CourseManagement,
    Grading,
    Communications,
    Analytics,
    Users,
    Evaluations,
    Coordination,
    Settings,
}

impl ViewId {
    pub const ALL: [ViewId; 13] = [
        ViewId::Dashboard,
        ViewId::Catalog,
        ViewId::CoursePlayer,
        ViewId::Assessments,
        ViewId::Profile,
        ViewId::CourseManagement,
        ViewId::Grading,
        ViewId::Communications,
        ViewId::Analytics,
        ViewId::Users,
        ViewId::Evaluations,
        ViewId::Coordination,
        ViewId::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Catalog => "catalog",
            Self::CoursePlayer => "course_player",
            Self::Assessments => "assessments",
            Self::Profile => "profile",
            Self::CourseManagement => "course_management",
            Self::Grading => "grading",
            Self::Communications => "communications",
            Self::Analytics => "analytics",
            Self::Users => "users",
            Self::Evaluations => "evaluations",
            Self::Coordination => "coordination",
            Self::Settings => "settings",
        }
    }

    /// Breadcrumb text: the identifier with its underscore turned into a space.
    pub fn breadcrumb(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for ViewId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == wanted)
            .ok_or_else(|| ParseError::UnknownView(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StudentView {
    Dashboard,
    Catalog,
    CoursePlayer,
    Assessments,
    Profile,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InstructorView {
    Dashboard,
    CourseManagement,
    Grading,
    Communications,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AdminView {
    Analytics,
    Coordination,
    Evaluations,
    Users,
    Settings,
}

impl StudentView {
    pub fn from_view(view: ViewId) -> Option<Self> {
        match view {
            ViewId::Dashboard => Some(Self::Dashboard),
            ViewId::Catalog => Some(Self::Catalog),
            ViewId::CoursePlayer => Some(Self::CoursePlayer),
            ViewId::Assessments => Some(Self::Assessments),
            ViewId::Profile => Some(Self::Profile),
            _ => None,
        }
    }
}

impl InstructorView {
    pub fn from_view(view: ViewId) -> Option<Self> {
        match view {
            ViewId::Dashboard => Some(Self::Dashboard),
            ViewId::CourseManagement => Some(Self::CourseManagement),
            ViewId::Grading => Some(Self::Grading),
            ViewId::Communications => Some(Self::Communications),
            _ => None,
        }
    }
}

impl AdminView {
    pub fn from_view(view: ViewId) -> Option<Self> {
        match view {
            ViewId::Analytics => Some(Self::Analytics),
            ViewId::Coordination => Some(Self::Coordination),
            ViewId::Evaluations => Some(Self::Evaluations),
            ViewId::Users => Some(Self::Users),
            ViewId::Settings => Some(Self::Settings),
            _ => None,
        }
    }
}
