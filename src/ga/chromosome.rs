//! Gene pool and random timetable initialisation.
//!
//! Every batch-day gets one break at a position drawn uniformly from the
//! layout's break positions, whatever the day length: a draw past the end
//! of the day leaves that day without a break. Every other period gets a uniformly random
//! subject (with its faculty) and a uniformly random classroom. Periods
//! are not coordinated with each other, so fresh timetables usually carry
//! hard violations; selection does the rest.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{
    BatchId, BatchTimetable, ClassroomId, DaySchedule, EntitySnapshot, FacultyId, Lesson, Slot,
    SubjectId, Timetable, WeekLayout,
};

/// The alleles a lesson gene can take.
#[derive(Debug, Clone, Default)]
pub struct GenePool {
    /// (subject, faculty) pairs.
    subjects: Vec<(SubjectId, FacultyId)>,
    classrooms: Vec<ClassroomId>,
}

impl GenePool {
    /// Extracts subjects and classrooms from a snapshot.
    pub fn from_snapshot(snapshot: &EntitySnapshot) -> Self {
        Self {
            subjects: snapshot
                .subjects
                .iter()
                .map(|s| (s.id, s.faculty_id))
                .collect(),
            classrooms: snapshot.classrooms.iter().map(|c| c.id).collect(),
        }
    }

    /// Draws a random lesson. `None` if the pool has no subjects or no classrooms.
    pub fn random_lesson<R: Rng>(&self, rng: &mut R) -> Option<Lesson> {
        let &(subject_id, faculty_id) = self.subjects.choose(rng)?;
        let &classroom_id = self.classrooms.choose(rng)?;
        Some(Lesson::new(subject_id, faculty_id, classroom_id))
    }
}

/// Creates a random timetable for `batches` shaped by `layout`.
///
/// With an empty gene pool lesson periods degrade to breaks; callers
/// validate inputs first.
pub fn random_timetable<R: Rng>(
    pool: &GenePool,
    batches: &[BatchId],
    layout: &WeekLayout,
    rng: &mut R,
) -> Timetable {
    let mut timetable = Timetable::new();

    for &batch_id in batches {
        let mut plan = BatchTimetable::new(batch_id);
        for &day in &layout.days {
            let break_slot = layout.break_positions.choose(rng).copied();
            let slots = (0..layout.periods_per_day)
                .map(|p| {
                    if Some(p) == break_slot {
                        return Slot::break_for(batch_id);
                    }
                    match pool.random_lesson(rng) {
                        Some(lesson) => Slot::lesson_for(batch_id, lesson),
                        None => Slot::break_for(batch_id),
                    }
                })
                .collect();
            plan.days.push(DaySchedule::new(day, slots));
        }
        timetable.batches.push(plan);
    }

    timetable
}
