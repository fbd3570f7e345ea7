//! Timetabling domain models.
//!
//! Provides the entity records the engine schedules over and the
//! timetable type it produces.
//!
//! # Domain Mappings
//!
//! | u-timetable | Academic | Training centre |
//! |-------------|----------|-----------------|
//! | Batch | Student section | Course cohort |
//! | Subject | Course | Module |
//! | Faculty | Lecturer | Trainer |
//! | Classroom | Lecture hall | Lab / room |
//! | Timetable | Weekly schedule | Weekly roster |

mod batch;
mod classroom;
mod faculty;
mod snapshot;
mod subject;
mod timetable;
mod week;

pub use batch::{Batch, BatchId};
pub use classroom::{Classroom, ClassroomId};
pub use faculty::{Faculty, FacultyId};
pub use snapshot::EntitySnapshot;
pub use subject::{Subject, SubjectId};
pub use timetable::{BatchTimetable, DaySchedule, Lesson, Slot, Timetable};
pub use week::{WeekLayout, Weekday};
