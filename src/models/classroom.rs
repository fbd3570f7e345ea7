//! Classroom model.

use serde::{Deserialize, Serialize};

/// Classroom identifier.
pub type ClassroomId = u32;

/// A room lessons are held in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: ClassroomId,
    /// Display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(id: ClassroomId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }
}
