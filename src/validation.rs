//! Input validation for timetabling runs.
//!
//! Checks the entity snapshot before a run is started. Detects:
//! - Missing data (any of the four record lists is empty)
//! - Duplicate IDs within a record list
//! - Duplicate course codes
//! - Subjects referencing a faculty that doesn't exist
//!
//! The engine assumes all of these hold; callers surface failures as a
//! "missing data" condition instead of starting a run.

use crate::models::EntitySnapshot;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required record list is empty.
    MissingData,
    /// Two records of the same type share an ID.
    DuplicateId,
    /// Two subjects share a course code.
    DuplicateCourseCode,
    /// A subject references a faculty that doesn't exist.
    UnknownFaculty,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the entity snapshot for a run.
///
/// Checks:
/// 1. Subjects, faculties, batches and classrooms are all non-empty
/// 2. No duplicate IDs within each list
/// 3. No duplicate course codes
/// 4. Every subject's faculty exists
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &EntitySnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    let missing = [
        ("subjects", snapshot.subjects.is_empty()),
        ("faculties", snapshot.faculties.is_empty()),
        ("batches", snapshot.batches.is_empty()),
        ("classrooms", snapshot.classrooms.is_empty()),
    ];
    for (what, empty) in missing {
        if empty {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingData,
                format!("No {what} defined"),
            ));
        }
    }

    check_duplicates("classroom", snapshot.classrooms.iter().map(|c| c.id), &mut errors);
    check_duplicates("batch", snapshot.batches.iter().map(|b| b.id), &mut errors);
    check_duplicates("subject", snapshot.subjects.iter().map(|s| s.id), &mut errors);

    let faculty_ids =
        check_duplicates("faculty", snapshot.faculties.iter().map(|f| f.id), &mut errors);

    let mut course_codes = HashSet::new();
    for s in &snapshot.subjects {
        if !course_codes.insert(s.course_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseCode,
                format!("Duplicate course code: {}", s.course_code),
            ));
        }
        if !faculty_ids.contains(&s.faculty_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFaculty,
                format!(
                    "Subject '{}' references unknown faculty {}",
                    s.course_code, s.faculty_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports repeated IDs and returns the distinct set.
fn check_duplicates(
    what: &str,
    ids: impl Iterator<Item = u32>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<u32> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {what} ID: {id}"),
            ));
        }
    }
    seen
}
