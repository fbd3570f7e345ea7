//! Timetable (candidate solution) model.
//!
//! A timetable holds one weekly plan per batch. Each plan maps active days
//! to an ordered sequence of period slots; a slot is either a lesson or a
//! break.
//!
//! # Invariants
//!
//! Operators keep these; the evaluator does not rely on them:
//! - every day has exactly `periods_per_day` slots
//! - every slot's `batch_id` equals the owning batch
//!
//! "Exactly one break per day" is not a representation invariant. It is
//! scored as a hard violation by [`crate::fitness`].

use serde::{Deserialize, Serialize};

use super::{BatchId, ClassroomId, FacultyId, SubjectId, Weekday};

/// A complete weekly timetable covering every batch.
///
/// `Clone` is a deep copy; timetables never share slot storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Per-batch plans, in scheduling order.
    pub batches: Vec<BatchTimetable>,
}

/// The weekly plan of one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTimetable {
    /// Owning batch.
    pub batch_id: BatchId,
    /// One entry per active day.
    pub days: Vec<DaySchedule>,
}

/// The period sequence of one batch on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub slots: Vec<Slot>,
}

/// One period. `lesson == None` marks a break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Batch whose day this slot belongs to.
    pub batch_id: BatchId,
    /// Lesson held in this period, if any.
    pub lesson: Option<Lesson>,
}

/// A subject taught by its faculty in a classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lesson {
    pub subject_id: SubjectId,
    /// Always the subject's faculty.
    pub faculty_id: FacultyId,
    pub classroom_id: ClassroomId,
}

impl Slot {
    /// Creates a break slot.
    pub fn break_for(batch_id: BatchId) -> Self {
        Self {
            batch_id,
            lesson: None,
        }
    }

    /// Creates a lesson slot.
    pub fn lesson_for(batch_id: BatchId, lesson: Lesson) -> Self {
        Self {
            batch_id,
            lesson: Some(lesson),
        }
    }

    #[inline]
    pub fn is_break(&self) -> bool {
        self.lesson.is_none()
    }
}

impl Lesson {
    pub fn new(subject_id: SubjectId, faculty_id: FacultyId, classroom_id: ClassroomId) -> Self {
        Self {
            subject_id,
            faculty_id,
            classroom_id,
        }
    }
}

impl DaySchedule {
    pub fn new(day: Weekday, slots: Vec<Slot>) -> Self {
        Self { day, slots }
    }

    /// Number of break slots.
    pub fn break_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_break()).count()
    }

    /// Lessons with their period index, breaks skipped.
    pub fn lessons(&self) -> impl Iterator<Item = (usize, &Lesson)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.lesson.as_ref().map(|l| (i, l)))
    }
}

impl BatchTimetable {
    pub fn new(batch_id: BatchId) -> Self {
        Self {
            batch_id,
            days: Vec::new(),
        }
    }

    /// Finds the schedule for a day.
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Finds the schedule for a day, mutably.
    pub fn day_mut(&mut self, day: Weekday) -> Option<&mut DaySchedule> {
        self.days.iter_mut().find(|d| d.day == day)
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the plan for a batch.
    pub fn batch(&self, batch_id: BatchId) -> Option<&BatchTimetable> {
        self.batches.iter().find(|b| b.batch_id == batch_id)
    }

    /// Whether a batch has a plan in this timetable.
    pub fn contains_batch(&self, batch_id: BatchId) -> bool {
        self.batch(batch_id).is_some()
    }

    /// Total number of lessons across all batches and days.
    pub fn lesson_count(&self) -> usize {
        self.batches
            .iter()
            .flat_map(|b| b.days.iter())
            .map(|d| d.lessons().count())
            .sum()
    }

    /// Whether every day has `periods_per_day` slots and every slot belongs
    /// to its batch.
    pub fn is_well_formed(&self, periods_per_day: usize) -> bool {
        self.batches.iter().all(|b| {
            b.days.iter().all(|d| {
                d.slots.len() == periods_per_day && d.slots.iter().all(|s| s.batch_id == b.batch_id)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day(batch_id: BatchId) -> DaySchedule {
        DaySchedule::new(
            Weekday::Monday,
            vec![
                Slot::lesson_for(batch_id, Lesson::new(1, 10, 100)),
                Slot::lesson_for(batch_id, Lesson::new(2, 20, 200)),
                Slot::break_for(batch_id),
            ],
        )
    }

    #[test]
    fn test_day_schedule_queries() {
        let day = sample_day(1);
        assert_eq!(day.break_count(), 1);
        let lessons: Vec<usize> = day.lessons().map(|(i, _)| i).collect();
        assert_eq!(lessons, vec![0, 1]);
    }

    #[test]
    fn test_timetable_lookups() {
        let mut b = BatchTimetable::new(1);
        b.days.push(sample_day(1));
        let tt = Timetable { batches: vec![b] };

        assert!(tt.contains_batch(1));
        assert!(!tt.contains_batch(2));
        assert_eq!(tt.lesson_count(), 2);
        assert!(tt.batch(1).and_then(|b| b.day(Weekday::Monday)).is_some());
        assert!(tt.batch(1).and_then(|b| b.day(Weekday::Friday)).is_none());
    }

    #[test]
    fn test_well_formed() {
        let mut b = BatchTimetable::new(1);
        b.days.push(sample_day(1));
        let tt = Timetable { batches: vec![b] };
        assert!(tt.is_well_formed(3));
        assert!(!tt.is_well_formed(4));

        // Slot owned by another batch
        let mut b = BatchTimetable::new(1);
        b.days.push(sample_day(2));
        let tt = Timetable { batches: vec![b] };
        assert!(!tt.is_well_formed(3));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut b = BatchTimetable::new(1);
        b.days.push(sample_day(1));
        let original = Timetable { batches: vec![b] };
        let mut copy = original.clone();
        copy.batches[0].days[0].slots[0] = Slot::break_for(1);

        assert_eq!(original.batches[0].days[0].break_count(), 1);
        assert_eq!(copy.batches[0].days[0].break_count(), 2);
    }
}
