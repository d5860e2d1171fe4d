use serde::{Deserialize, Serialize};

/// Difficulty level shown on course cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

/// Kind of content a course module delivers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Video,
    Text,
    Quiz,
    Assignment,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Video => "video",
            ModuleKind::Text => "text",
            ModuleKind::Quiz => "quiz",
            ModuleKind::Assignment => "assignment",
        }
    }
}

/// One unit of course content. Belongs to exactly one course; the order of
/// the `modules` vector is the presentation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub completed: bool,
    pub kind: ModuleKind,
}

/// A course in the catalog. Read-only reference data for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// Display name of the instructor (denormalized for card rendering).
    pub instructor: String,
    /// Must reference a directory user with the tutor role.
    pub instructor_id: String,
    pub duration: String,
    pub level: CourseLevel,
    pub price: f64,
    pub rating: f64,
    pub students: u32,
    /// Completion percentage for the current student, when enrolled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    pub modules: Vec<CourseModule>,
    pub category: String,
    pub is_enrolled: bool,
}

impl Course {
    /// Modules the current student has finished.
    pub fn completed_modules(&self) -> usize {
        self.modules.iter().filter(|m| m.completed).count()
    }
}
