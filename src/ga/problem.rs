//! Timetabling GA problem definition.
//!
//! Implements [`GaProblem`] for weekly timetables. Bridges the entity
//! snapshot and configuration to the generic population engine.

use rand::Rng;

use super::chromosome::{random_timetable, GenePool};
use super::operators::{day_crossover, slot_mutation};
use super::GaProblem;
use crate::config::SchedulerConfig;
use crate::fitness::{Fitness, FitnessEvaluator};
use crate::models::{BatchId, EntitySnapshot, Timetable, WeekLayout};

/// GA problem definition for timetabling.
///
/// Generates random timetables, recombines them batch-day-wise and scores
/// them with a [`FitnessEvaluator`].
///
/// # Example
/// ```
/// use u_timetable::config::SchedulerConfig;
/// use u_timetable::ga::{GaProblem, TimetableProblem};
/// use u_timetable::models::{Batch, Classroom, EntitySnapshot, Faculty, Subject};
/// use rand::SeedableRng;
///
/// let snapshot = EntitySnapshot::new()
///     .with_faculty(Faculty::new(1, "Dr. Rao"))
///     .with_subject(Subject::new(1, "Physics", "PH101", 1))
///     .with_batch(Batch::new(1, "CSE-A", 60))
///     .with_classroom(Classroom::new(1, "Room 1", 70));
/// let problem = TimetableProblem::new(&snapshot, &SchedulerConfig::default());
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
/// let timetable = problem.create_individual(&mut rng);
/// assert_eq!(timetable.batches.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableProblem<'a> {
    pool: GenePool,
    batch_ids: Vec<BatchId>,
    layout: WeekLayout,
    crossover_bias: f64,
    evaluator: FitnessEvaluator<'a>,
}

impl<'a> TimetableProblem<'a> {
    /// Creates a problem over `snapshot` shaped by `config`.
    pub fn new(snapshot: &'a EntitySnapshot, config: &SchedulerConfig) -> Self {
        let evaluator = FitnessEvaluator::new(snapshot, config.week.break_positions.clone())
            .with_policy(config.constraints.clone());
        Self {
            pool: GenePool::from_snapshot(snapshot),
            batch_ids: snapshot.batches.iter().map(|b| b.id).collect(),
            layout: config.week.clone(),
            crossover_bias: config.evolution.crossover_bias,
            evaluator,
        }
    }

    /// Full evaluation: score and issues.
    pub fn fitness(&self, timetable: &Timetable) -> Fitness {
        self.evaluator.evaluate(timetable)
    }

    pub fn layout(&self) -> &WeekLayout {
        &self.layout
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<'a> {
        &self.evaluator
    }
}

impl GaProblem for TimetableProblem<'_> {
    type Individual = Timetable;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Timetable {
        random_timetable(&self.pool, &self.batch_ids, &self.layout, rng)
    }

    fn evaluate(&self, individual: &Timetable) -> i32 {
        self.evaluator.score(individual)
    }

    fn crossover<R: Rng>(&self, parent1: &Timetable, parent2: &Timetable, rng: &mut R) -> Timetable {
        day_crossover(parent1, parent2, &self.layout.days, self.crossover_bias, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Timetable, rng: &mut R) {
        slot_mutation(
            individual,
            &self.pool,
            &self.layout.days,
            self.layout.periods_per_day,
            rng,
        );
    }
}
