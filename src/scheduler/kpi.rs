//! Timetable quality metrics (KPIs).
//!
//! Diagnostic figures computed from a finished timetable and its snapshot.
//! None of them feed back into the fitness score.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Lesson count | Non-break slots across all batches |
//! | Break count | Break slots across all batches |
//! | Slot utilization | Lessons / all slots |
//! | Subject load | Lessons of each subject per batch vs. `classes_per_week` |
//! | Total shortfall | Sum of missing weekly lessons |
//! | Busiest faculty day | Highest lesson count of one faculty on one day |

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{BatchId, EntitySnapshot, FacultyId, SubjectId, Timetable, Weekday};

/// Weekly lessons of one subject for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectLoad {
    pub batch_id: BatchId,
    pub subject_id: SubjectId,
    /// Lessons placed in the timetable.
    pub scheduled: u32,
    /// Subject's `classes_per_week`.
    pub required: u32,
}

impl SubjectLoad {
    /// Lessons still missing to reach the weekly target.
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.scheduled)
    }
}

/// Lessons taught by one faculty on one day, summed over batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyDayLoad {
    pub faculty_id: FacultyId,
    pub day: Weekday,
    pub classes: u32,
}

/// Timetable performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableKpi {
    pub lesson_count: usize,
    pub break_count: usize,
    /// Fraction of slots holding a lesson (0.0..1.0).
    pub slot_utilization: f64,
    /// One entry per (batch, subject), batches in timetable order and
    /// subjects in snapshot order.
    pub subject_loads: Vec<SubjectLoad>,
    pub total_shortfall: u32,
    /// Earliest day, then lowest faculty id, on ties.
    pub busiest_faculty_day: Option<FacultyDayLoad>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and the snapshot it was built from.
    pub fn calculate(timetable: &Timetable, snapshot: &EntitySnapshot) -> Self {
        let mut lesson_count = 0;
        let mut break_count = 0;
        let mut per_subject: BTreeMap<(BatchId, SubjectId), u32> = BTreeMap::new();
        let mut per_faculty_day: BTreeMap<(Weekday, FacultyId), u32> = BTreeMap::new();

        for plan in &timetable.batches {
            for day in &plan.days {
                break_count += day.break_count();
                for (_, lesson) in day.lessons() {
                    lesson_count += 1;
                    *per_subject.entry((plan.batch_id, lesson.subject_id)).or_default() += 1;
                    *per_faculty_day.entry((day.day, lesson.faculty_id)).or_default() += 1;
                }
            }
        }

        let subject_loads: Vec<SubjectLoad> = timetable
            .batches
            .iter()
            .flat_map(|plan| {
                let per_subject = &per_subject;
                snapshot.subjects.iter().map(move |subject| SubjectLoad {
                    batch_id: plan.batch_id,
                    subject_id: subject.id,
                    scheduled: per_subject
                        .get(&(plan.batch_id, subject.id))
                        .copied()
                        .unwrap_or(0),
                    required: subject.classes_per_week,
                })
            })
            .collect();
        let total_shortfall = subject_loads.iter().map(SubjectLoad::shortfall).sum();

        let busiest_faculty_day = per_faculty_day
            .iter()
            .min_by_key(|&(_, &classes)| Reverse(classes))
            .map(|(&(day, faculty_id), &classes)| FacultyDayLoad {
                faculty_id,
                day,
                classes,
            });

        let total_slots = lesson_count + break_count;
        let slot_utilization = if total_slots == 0 {
            0.0
        } else {
            lesson_count as f64 / total_slots as f64
        };

        Self {
            lesson_count,
            break_count,
            slot_utilization,
            subject_loads,
            total_shortfall,
            busiest_faculty_day,
        }
    }

    /// Whether every subject got at least its weekly lesson count for
    /// every batch.
    pub fn meets_weekly_targets(&self) -> bool {
        self.total_shortfall == 0
    }
}
