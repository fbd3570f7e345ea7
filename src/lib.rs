//! Genetic-algorithm timetable generation for academic institutions.
//!
//! Builds weekly class timetables for student batches from subjects,
//! faculties and classrooms. A population of random timetables is evolved
//! against a fitness function that zeroes any timetable with a hard
//! violation and deducts soft penalties otherwise.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Faculty`, `Subject`, `Batch`, `Classroom`,
//!   `EntitySnapshot`, `WeekLayout`, `Timetable`
//! - **`config`**: Week layout, evolution parameters, constraint policy
//! - **`validation`**: Input integrity checks (missing data, duplicate IDs, faculty refs)
//! - **`fitness`**: Hard/soft constraint evaluation and scoring
//! - **`ga`**: Timetable encoding and genetic operators
//! - **`engine`**: Generic population engine (ranking, survivors, breeding)
//! - **`scheduler`**: `GeneticScheduler` facade and `TimetableKpi`
//!
//! # Quick start
//!
//! ```
//! use u_timetable::config::{EvolutionConfig, SchedulerConfig};
//! use u_timetable::models::{Batch, Classroom, EntitySnapshot, Faculty, Subject, WeekLayout, Weekday};
//! use u_timetable::scheduler::{GeneticScheduler, TimetableKpi};
//!
//! let snapshot = EntitySnapshot::new()
//!     .with_faculty(Faculty::new(1, "Dr. Rao"))
//!     .with_faculty(Faculty::new(2, "Dr. Iyer"))
//!     .with_subject(Subject::new(1, "Physics", "PH101", 1))
//!     .with_subject(Subject::new(2, "Chemistry", "CH101", 2))
//!     .with_batch(Batch::new(1, "CSE-A", 60))
//!     .with_classroom(Classroom::new(1, "Room 1", 70))
//!     .with_classroom(Classroom::new(2, "Room 2", 70));
//!
//! let config = SchedulerConfig::default()
//!     .with_week(WeekLayout::new(vec![Weekday::Monday], 3))
//!     .with_evolution(EvolutionConfig::default().with_seed(7));
//!
//! let outcome = GeneticScheduler::new(&snapshot, config)?.run();
//! let kpi = TimetableKpi::calculate(&outcome.timetable, &snapshot);
//! assert_eq!(kpi.lesson_count + kpi.break_count, 3);
//! # Ok::<(), u_timetable::SchedulerError>(())
//! ```
//!
//! # Logging
//!
//! Progress is reported through the `log` facade. Install any logger
//! (e.g. `env_logger`) to see it.

pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::{ConstraintPolicy, EvolutionConfig, SchedulerConfig};
pub use error::{ConfigError, SchedulerError};
pub use fitness::{Fitness, FitnessEvaluator, Issue};
pub use models::{EntitySnapshot, Timetable};
pub use scheduler::{GeneticScheduler, ScheduleOutcome, TimetableKpi};
