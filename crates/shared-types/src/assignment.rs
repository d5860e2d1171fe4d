use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an assignment from the student's point of view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Submitted => "submitted",
            AssignmentStatus::Graded => "graded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
        }
    }
}

/// A graded piece of coursework. `course_id` is a back-reference; the
/// assignment is not owned by the course record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub due_date: NaiveDate,
    pub max_points: u32,
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submissions: Vec<Submission>,
}

/// A student's answer to an assignment, optionally graded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub assignment_id: String,
    pub submitted_at: DateTime<Utc>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::Graded).unwrap(),
            "\"graded\""
        );
    }
}
