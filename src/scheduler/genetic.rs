//! Genetic timetable scheduler.
//!
//! Validates the inputs once, then runs the population engine over a
//! [`TimetableProblem`] and reports the best timetable together with its
//! full fitness breakdown.

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::engine::{GenerationStats, PopulationEngine};
use crate::error::SchedulerError;
use crate::fitness::Fitness;
use crate::ga::TimetableProblem;
use crate::models::{EntitySnapshot, Timetable};
use crate::validation::validate_snapshot;

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Best timetable of the final population.
    pub timetable: Timetable,
    /// Score and issues of `timetable`.
    pub fitness: Fitness,
    /// Per-generation statistics.
    pub history: Vec<GenerationStats>,
}

impl ScheduleOutcome {
    /// Whether the timetable has no hard violation.
    pub fn is_feasible(&self) -> bool {
        self.fitness.is_feasible()
    }

    pub fn score(&self) -> i32 {
        self.fitness.score
    }
}

/// Genetic-algorithm timetable scheduler.
///
/// # Example
/// ```
/// use u_timetable::config::{EvolutionConfig, SchedulerConfig};
/// use u_timetable::models::{Batch, Classroom, EntitySnapshot, Faculty, Subject};
/// use u_timetable::scheduler::GeneticScheduler;
///
/// let snapshot = EntitySnapshot::new()
///     .with_faculty(Faculty::new(1, "Dr. Rao"))
///     .with_subject(Subject::new(1, "Physics", "PH101", 1))
///     .with_batch(Batch::new(1, "CSE-A", 60))
///     .with_classroom(Classroom::new(1, "Room 1", 70));
/// let config = SchedulerConfig::default()
///     .with_evolution(EvolutionConfig::default().with_generations(5).with_seed(42));
///
/// let outcome = GeneticScheduler::new(&snapshot, config).unwrap().run();
/// assert_eq!(outcome.history.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticScheduler<'a> {
    snapshot: &'a EntitySnapshot,
    config: SchedulerConfig,
}

impl<'a> GeneticScheduler<'a> {
    /// Creates a scheduler after validating the configuration and the
    /// snapshot.
    pub fn new(snapshot: &'a EntitySnapshot, config: SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate()?;
        validate_snapshot(snapshot)?;
        Ok(Self { snapshot, config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs with the configured seed, or an OS-seeded generator if none.
    pub fn run(&self) -> ScheduleOutcome {
        let mut rng = match self.config.evolution.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the configured number of generations drawing from `rng`.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> ScheduleOutcome {
        let problem = TimetableProblem::new(self.snapshot, &self.config);
        let generations = self.config.evolution.generations;
        info!(
            "scheduling {} batches over {} days x {} periods",
            self.snapshot.batches.len(),
            self.config.week.days.len(),
            self.config.week.periods_per_day
        );

        let mut engine = PopulationEngine::from_validated(&problem, self.config.evolution.clone());
        let (timetable, _) = engine.run(generations, rng);
        let fitness = problem.fitness(&timetable);

        if fitness.is_feasible() {
            info!("feasible timetable found, score {}", fitness.score);
        } else {
            warn!(
                "no feasible timetable after {} generations ({} hard violations)",
                generations,
                fitness.hard_count()
            );
        }

        ScheduleOutcome {
            timetable,
            fitness,
            history: engine.into_history(),
        }
    }

    /// Scores a timetable against this scheduler's inputs.
    pub fn evaluate(&self, timetable: &Timetable) -> Fitness {
        TimetableProblem::new(self.snapshot, &self.config).fitness(timetable)
    }
}
