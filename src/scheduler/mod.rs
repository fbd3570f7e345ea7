//! Genetic timetable scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GeneticScheduler` evolves a fixed-size population of random weekly
//! timetables. Hard violations zero a candidate's score, so feasibility is
//! found through selection rather than construction; the best candidate of
//! the final population is returned whether or not it is feasible.
//!
//! # KPI
//!
//! `TimetableKpi` computes diagnostic metrics: lesson and break counts,
//! slot utilization, weekly subject load against `classes_per_week`, and
//! the busiest faculty day.

mod genetic;
mod kpi;

pub use genetic::{GeneticScheduler, ScheduleOutcome};
pub use kpi::{FacultyDayLoad, SubjectLoad, TimetableKpi};
