//! Error types.
//!
//! Errors only arise while constructing a scheduler. Once a run has
//! started it always completes; an infeasible outcome is reported through
//! the fitness score, not as an error.

use thiserror::Error;

use crate::validation::ValidationError;

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size {0} is too small: at least 4 is needed to keep 2 survivors")]
    PopulationTooSmall(usize),
    #[error("periods_per_day must be at least 1")]
    NoPeriods,
    #[error("no schedulable days configured")]
    NoDays,
    #[error("day {0} is listed more than once")]
    DuplicateDay(String),
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

/// Top-level error returned when a scheduler cannot be built.
#[derive(Debug, Clone, Error)]
pub enum SchedulerError {
    #[error("invalid input data: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulerError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_display() {
        let err = SchedulerError::from(ConfigError::PopulationTooSmall(3));
        assert!(err.to_string().contains("population_size 3"));

        let err = SchedulerError::from(vec![
            ValidationError::new(ValidationErrorKind::MissingData, "No subjects"),
            ValidationError::new(ValidationErrorKind::MissingData, "No batches"),
        ]);
        assert_eq!(err.to_string(), "invalid input data: No subjects; No batches");
    }
}
