use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    /// Percentage in `0..=100`.
    pub progress: u8,
    /// Stars in `0.0..=5.0`.
    pub rating: f32,
    pub category: String,
    pub image: String,
    pub price: String,
    pub duration: String,
    pub level: CourseLevel,
}

impl Course {
    pub const MAX_PROGRESS: u8 = 100;
    pub const MAX_RATING: f32 = 5.0;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        title: &str,
        instructor: &str,
        progress: u8,
        rating: f32,
        category: &str,
        image: &str,
        price: &str,
        duration: &str,
        level: CourseLevel,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            instructor: instructor.to_string(),
            progress: progress.min(Self::MAX_PROGRESS),
            rating: rating.clamp(0.0, Self::MAX_RATING),
            category: category.to_string(),
            image: image.to_string(),
            price: price.to_string(),
            duration: duration.to_string(),
            level,
        }
    }

    /// Copy of this course as a fresh enrollment: same catalog entry, no progress.
    pub fn enrolled(&self) -> Self {
        Self {
            progress: 0,
            ..self.clone()
        }
    }
}
