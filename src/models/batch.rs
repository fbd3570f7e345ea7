//! Batch (student cohort) model.

use serde::{Deserialize, Serialize};

/// Batch identifier.
pub type BatchId = u32;

/// A cohort of students sharing one timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier.
    pub id: BatchId,
    /// Display name.
    pub name: String,
    /// Number of enrolled students.
    pub num_students: u32,
}

impl Batch {
    /// Creates a batch.
    pub fn new(id: BatchId, name: impl Into<String>, num_students: u32) -> Self {
        Self {
            id,
            name: name.into(),
            num_students,
        }
    }
}
