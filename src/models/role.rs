use serde::{Deserialize, Serialize};

use crate::common::ParseError;
use crate::models::ViewId;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Instructor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }

    /// Capitalized name used in headings ("Student Login").
    pub fn title(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Instructor => "Instructor",
            Self::Admin => "Admin",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Student => "Access courses, assessments, and progress tracking.",
            Self::Instructor => "Manage content, grade assessments, and communicate.",
            Self::Admin => "Oversee users, analytics, and coordinate classes.",
        }
    }

    /// View shown right after a successful login.
    pub fn default_view(&self) -> ViewId {
        match self {
            Self::Admin => ViewId::Analytics,
            Self::Student | Self::Instructor => ViewId::Dashboard,
        }
    }

    /// Single letter shown in the header avatar.
    pub fn initial(&self) -> char {
        self.title().chars().next().unwrap_or('U')
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for Role {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "instructor" => Ok(Self::Instructor),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}
