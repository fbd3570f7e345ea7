//! Faculty model.
//!
//! A faculty member teaches one or more subjects. The daily class limit is
//! stored with the record and only enforced when
//! [`ConstraintPolicy::faculty_daily_limit`](crate::config::ConstraintPolicy)
//! is switched on.

use serde::{Deserialize, Serialize};

/// Faculty identifier.
pub type FacultyId = u32;

/// A teaching faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: FacultyId,
    /// Display name.
    pub name: String,
    /// Maximum lessons this faculty may teach on one day (default: 6).
    #[serde(default = "default_max_classes_per_day")]
    pub max_classes_per_day: u32,
    /// Average leave days taken per month (informational).
    #[serde(default)]
    pub avg_leaves_per_month: u32,
}

fn default_max_classes_per_day() -> u32 {
    6
}

impl Faculty {
    /// Creates a faculty member with default limits.
    pub fn new(id: FacultyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            max_classes_per_day: default_max_classes_per_day(),
            avg_leaves_per_month: 0,
        }
    }

    /// Sets the daily class limit.
    pub fn with_max_classes_per_day(mut self, max: u32) -> Self {
        self.max_classes_per_day = max;
        self
    }

    /// Sets the average monthly leave count.
    pub fn with_avg_leaves_per_month(mut self, leaves: u32) -> Self {
        self.avg_leaves_per_month = leaves;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_defaults() {
        let f = Faculty::new(1, "Dr. Rao");
        assert_eq!(f.max_classes_per_day, 6);
        assert_eq!(f.avg_leaves_per_month, 0);
    }

    #[test]
    fn test_faculty_deserialize_fills_defaults() {
        let f: Faculty = serde_json::from_str(r#"{"id": 3, "name": "Dr. Iyer"}"#).unwrap();
        assert_eq!(f.id, 3);
        assert_eq!(f.max_classes_per_day, 6);

        let f = Faculty::new(4, "Dr. Sen")
            .with_max_classes_per_day(2)
            .with_avg_leaves_per_month(1);
        assert_eq!(f.max_classes_per_day, 2);
        assert_eq!(f.avg_leaves_per_month, 1);
    }
}
