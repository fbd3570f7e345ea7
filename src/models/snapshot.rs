//! Read-only entity snapshot consumed by one scheduling run.

use serde::{Deserialize, Serialize};

use super::{Batch, BatchId, Classroom, ClassroomId, Faculty, FacultyId, Subject, SubjectId};

/// The four record lists a run schedules over.
///
/// Loaded once per run and never mutated by the engine. List order is
/// significant: batches are scheduled in this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Available classrooms.
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    /// Teaching faculty.
    #[serde(default)]
    pub faculties: Vec<Faculty>,
    /// Subjects, each referencing one faculty.
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Student batches, one timetable each.
    #[serde(default)]
    pub batches: Vec<Batch>,
}

impl EntitySnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a classroom.
    pub fn with_classroom(mut self, classroom: Classroom) -> Self {
        self.classrooms.push(classroom);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculties.push(faculty);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a batch.
    pub fn with_batch(mut self, batch: Batch) -> Self {
        self.batches.push(batch);
        self
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn faculty(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculties.iter().find(|f| f.id == id)
    }

    pub fn batch(&self, id: BatchId) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == id)
    }

    pub fn classroom(&self, id: ClassroomId) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    /// Batch display name, falling back to the id.
    pub fn batch_name(&self, id: BatchId) -> String {
        self.batch(id)
            .map(|b| b.name.clone())
            .unwrap_or_else(|| format!("Batch {id}"))
    }

    /// Subject display name, falling back to the id.
    pub fn subject_name(&self, id: SubjectId) -> String {
        self.subject(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Subject {id}"))
    }
}
