//! Subject model.
//!
//! Each subject is taught by exactly one faculty member. The weekly class
//! count is carried for reporting; the search does not enforce it.

use serde::{Deserialize, Serialize};

use super::FacultyId;

/// Subject identifier.
pub type SubjectId = u32;

/// An academic subject (course).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: SubjectId,
    /// Display name.
    pub name: String,
    /// Course code, unique across subjects (e.g., "CS101").
    pub course_code: String,
    /// Faculty teaching this subject.
    pub faculty_id: FacultyId,
    /// Intended lessons per week (default: 1).
    #[serde(default = "default_classes_per_week")]
    pub classes_per_week: u32,
}

fn default_classes_per_week() -> u32 {
    1
}

impl Subject {
    /// Creates a subject taught by `faculty_id`.
    pub fn new(
        id: SubjectId,
        name: impl Into<String>,
        course_code: impl Into<String>,
        faculty_id: FacultyId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            course_code: course_code.into(),
            faculty_id,
            classes_per_week: default_classes_per_week(),
        }
    }

    /// Sets the intended weekly lesson count.
    pub fn with_classes_per_week(mut self, count: u32) -> Self {
        self.classes_per_week = count;
        self
    }
}
