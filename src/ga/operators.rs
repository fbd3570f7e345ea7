//! Genetic operators for timetables.
//!
//! - **Crossover** works on whole batch-days: for every batch both parents
//!   plan, each day is copied from one parent by an independent coin flip.
//!   A batch only one parent plans is copied unchanged.
//! - **Mutation** redraws one random lesson slot. Breaks are never moved
//!   or replaced by mutation; break placement only changes when crossover
//!   inherits a whole day.
//!
//! Both operators preserve day length and slot ownership.

use log::trace;
use rand::prelude::{IndexedMutRandom, IndexedRandom};
use rand::Rng;

use super::GenePool;
use crate::models::{BatchId, BatchTimetable, Slot, Timetable, Weekday};

/// Batch-day uniform crossover.
///
/// The child covers the union of the parents' batches: first parent's
/// batches in order, then any only the second parent has. For a batch in
/// both, each day in `days` comes from `parent1` with probability `bias`,
/// otherwise from `parent2`.
pub fn day_crossover<R: Rng>(
    parent1: &Timetable,
    parent2: &Timetable,
    days: &[Weekday],
    bias: f64,
    rng: &mut R,
) -> Timetable {
    let mut batch_ids: Vec<BatchId> = parent1.batches.iter().map(|b| b.batch_id).collect();
    batch_ids.extend(
        parent2
            .batches
            .iter()
            .map(|b| b.batch_id)
            .filter(|id| !parent1.contains_batch(*id)),
    );

    let mut child = Timetable::new();
    for batch_id in batch_ids {
        match (parent1.batch(batch_id), parent2.batch(batch_id)) {
            (Some(a), Some(b)) => {
                let mut plan = BatchTimetable::new(batch_id);
                for &day in days {
                    let (first, second) = if rng.random_bool(bias) { (a, b) } else { (b, a) };
                    if let Some(schedule) = first.day(day).or_else(|| second.day(day)) {
                        plan.days.push(schedule.clone());
                    }
                }
                child.batches.push(plan);
            }
            (Some(only), None) | (None, Some(only)) => child.batches.push(only.clone()),
            (None, None) => {}
        }
    }
    child
}

/// Redraws the lesson in one random slot.
///
/// Picks a batch, a day from `days` and a period in `0..periods_per_day`
/// uniformly. A break slot is left as is. Returns whether a slot was
/// replaced.
pub fn slot_mutation<R: Rng>(
    timetable: &mut Timetable,
    pool: &GenePool,
    days: &[Weekday],
    periods_per_day: usize,
    rng: &mut R,
) -> bool {
    let Some(plan) = timetable.batches.choose_mut(rng) else {
        return false;
    };
    let Some(&day) = days.choose(rng) else {
        return false;
    };
    if periods_per_day == 0 {
        return false;
    }
    let period = rng.random_range(0..periods_per_day);
    let batch_id = plan.batch_id;

    let Some(slot) = plan
        .day_mut(day)
        .and_then(|schedule| schedule.slots.get_mut(period))
    else {
        return false;
    };
    if slot.is_break() {
        trace!("mutation hit break: batch {batch_id} {day} period {period}");
        return false;
    }
    let Some(lesson) = pool.random_lesson(rng) else {
        return false;
    };
    *slot = Slot::lesson_for(batch_id, lesson);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random_timetable;
    use crate::models::{
        Batch, Classroom, DaySchedule, EntitySnapshot, Faculty, Subject, WeekLayout,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_snapshot() -> EntitySnapshot {
        EntitySnapshot::new()
            .with_faculty(Faculty::new(1, "Dr. Rao"))
            .with_faculty(Faculty::new(2, "Dr. Iyer"))
            .with_faculty(Faculty::new(3, "Dr. Sen"))
            .with_subject(Subject::new(1, "Physics", "PH101", 1))
            .with_subject(Subject::new(2, "Chemistry", "CH101", 2))
            .with_subject(Subject::new(3, "Maths", "MA101", 3))
            .with_batch(Batch::new(10, "CSE-A", 60))
            .with_batch(Batch::new(20, "CSE-B", 55))
            .with_classroom(Classroom::new(1, "Room 1", 70))
            .with_classroom(Classroom::new(2, "Room 2", 70))
    }

    fn parents(rng: &mut SmallRng) -> (GenePool, WeekLayout, Timetable, Timetable) {
        let snap = sample_snapshot();
        let pool = GenePool::from_snapshot(&snap);
        let layout = WeekLayout::default();
        let p1 = random_timetable(&pool, &[10, 20], &layout, rng);
        let p2 = random_timetable(&pool, &[10, 20], &layout, rng);
        (pool, layout, p1, p2)
    }

    #[test]
    fn test_crossover_days_come_from_a_parent() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (_, layout, p1, p2) = parents(&mut rng);

        for _ in 0..20 {
            let child = day_crossover(&p1, &p2, &layout.days, 0.5, &mut rng);
            assert!(child.is_well_formed(6));
            assert_eq!(child.batches.len(), 2);
            for plan in &child.batches {
                for day in &plan.days {
                    let from1 = p1.batch(plan.batch_id).and_then(|b| b.day(day.day));
                    let from2 = p2.batch(plan.batch_id).and_then(|b| b.day(day.day));
                    assert!(from1 == Some(day) || from2 == Some(day));
                }
            }
        }
    }

    #[test]
    fn test_crossover_bias_extremes() {
        let mut rng = SmallRng::seed_from_u64(1);
        let (_, layout, p1, p2) = parents(&mut rng);

        assert_eq!(day_crossover(&p1, &p2, &layout.days, 1.0, &mut rng), p1);
        assert_eq!(day_crossover(&p1, &p2, &layout.days, 0.0, &mut rng), p2);
    }

    #[test]
    fn test_crossover_with_itself() {
        let mut rng = SmallRng::seed_from_u64(5);
        let (_, layout, p1, _) = parents(&mut rng);
        let child = day_crossover(&p1, &p1, &layout.days, 0.5, &mut rng);
        assert_eq!(child, p1);
    }

    #[test]
    fn test_crossover_union_of_batches() {
        let mut rng = SmallRng::seed_from_u64(9);
        let (_, layout, mut p1, mut p2) = parents(&mut rng);
        // p1 keeps batch 10 only, p2 keeps batch 20 only.
        p1.batches.remove(1);
        p2.batches.remove(0);

        let child = day_crossover(&p1, &p2, &layout.days, 0.5, &mut rng);
        let ids: Vec<BatchId> = child.batches.iter().map(|b| b.batch_id).collect();
        assert_eq!(ids, vec![10, 20]);
        assert_eq!(child.batch(10), p1.batch(10));
        assert_eq!(child.batch(20), p2.batch(20));
    }

    #[test]
    fn test_crossover_does_not_alias_parents() {
        let mut rng = SmallRng::seed_from_u64(11);
        let (_, layout, p1, p2) = parents(&mut rng);
        let snapshot = p1.clone();

        let mut child = day_crossover(&p1, &p2, &layout.days, 1.0, &mut rng);
        child.batches[0].days[0].slots[0] = Slot::break_for(10);
        assert_eq!(p1, snapshot);
    }

    #[test]
    fn test_mutation_keeps_shape_and_ownership() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (pool, layout, mut tt, _) = parents(&mut rng);

        for _ in 0..200 {
            slot_mutation(&mut tt, &pool, &layout.days, layout.periods_per_day, &mut rng);
            assert!(tt.is_well_formed(6));
        }
        for plan in &tt.batches {
            for day in &plan.days {
                assert_eq!(day.break_count(), 1);
            }
        }
    }

    #[test]
    fn test_mutation_never_touches_breaks() {
        let mut rng = SmallRng::seed_from_u64(3);
        let (pool, _, _, _) = parents(&mut rng);
        // A day made only of breaks: every pick lands on a break.
        let layout = WeekLayout::new(vec![Weekday::Monday], 4);
        let mut plan = BatchTimetable::new(10);
        plan.days.push(DaySchedule::new(
            Weekday::Monday,
            vec![Slot::break_for(10); 4],
        ));
        let mut tt = Timetable { batches: vec![plan] };
        let before = tt.clone();

        for _ in 0..50 {
            assert!(!slot_mutation(&mut tt, &pool, &layout.days, 4, &mut rng));
        }
        assert_eq!(tt, before);
    }

    #[test]
    fn test_mutation_eventually_changes_a_lesson() {
        let mut rng = SmallRng::seed_from_u64(8);
        let (pool, layout, tt, _) = parents(&mut rng);
        let mut changed = false;
        for _ in 0..100 {
            let mut copy = tt.clone();
            slot_mutation(&mut copy, &pool, &layout.days, layout.periods_per_day, &mut rng);
            if copy != tt {
                changed = true;
                break;
            }
        }
        assert!(changed, "slot mutation should alter some lesson");
    }

    #[test]
    fn test_mutation_on_empty_timetable() {
        let mut rng = SmallRng::seed_from_u64(0);
        let (pool, layout, _, _) = parents(&mut rng);
        let mut tt = Timetable::new();
        assert!(!slot_mutation(&mut tt, &pool, &layout.days, 6, &mut rng));
    }
}
