use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorEvaluation {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub rating: f32,
    pub reviews: u32,
}

impl InstructorEvaluation {
    pub fn new(id: u32, name: &str, department: &str, rating: f32, reviews: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            department: department.to_string(),
            rating,
            reviews,
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First character of every whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
