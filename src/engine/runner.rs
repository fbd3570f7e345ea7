//! Generational evolution loop.
//!
//! # Algorithm
//!
//! 1. Score and rank the population (stable, best first).
//! 2. Keep survivors: top quarter plus a random quarter of the rest.
//! 3. Breed children from two distinct random survivors; each child is
//!    mutated with probability `mutation_rate`.
//! 4. Replace the population with survivors followed by children.
//!
//! After the generation budget the first highest-scoring individual is
//! returned.

use log::{debug, info};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::selection::{first_best, rank_descending, select_survivors};
use crate::config::EvolutionConfig;
use crate::error::ConfigError;
use crate::ga::GaProblem;

/// Population statistics at the start of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    pub best_score: i32,
    pub mean_score: f64,
    /// Individuals scoring above 0.
    pub feasible_count: usize,
}

impl GenerationStats {
    fn from_scores(generation: usize, scores: &[i32]) -> Self {
        let best_score = scores.iter().copied().max().unwrap_or(0);
        let mean_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64
        };
        Self {
            generation,
            best_score,
            mean_score,
            feasible_count: scores.iter().filter(|&&s| s > 0).count(),
        }
    }
}

/// Owns a population and evolves it against a [`GaProblem`].
///
/// # Example
/// ```no_run
/// use u_timetable::config::{EvolutionConfig, SchedulerConfig};
/// use u_timetable::engine::PopulationEngine;
/// use u_timetable::ga::TimetableProblem;
/// use u_timetable::models::EntitySnapshot;
/// use rand::SeedableRng;
///
/// let snapshot = EntitySnapshot::new(); // filled by the caller
/// let config = SchedulerConfig::default();
/// let problem = TimetableProblem::new(&snapshot, &config);
/// let mut engine = PopulationEngine::new(&problem, config.evolution.clone()).unwrap();
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
/// let (best, score) = engine.run(50, &mut rng);
/// ```
pub struct PopulationEngine<'p, P: GaProblem> {
    problem: &'p P,
    config: EvolutionConfig,
    population: Vec<P::Individual>,
    history: Vec<GenerationStats>,
}

impl<'p, P: GaProblem> PopulationEngine<'p, P> {
    /// Creates an engine. Fails if the population cannot keep two survivors.
    pub fn new(problem: &'p P, config: EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(problem, config))
    }

    /// Creates an engine from a config that already passed validation.
    pub(crate) fn from_validated(problem: &'p P, config: EvolutionConfig) -> Self {
        Self {
            problem,
            config,
            population: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Replaces the population with `population_size` random individuals.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        self.population = (0..self.config.population_size)
            .map(|_| self.problem.create_individual(rng))
            .collect();
        self.history.clear();
    }

    /// Runs one generation and returns the statistics it started from.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> GenerationStats {
        let scores = self.score_population();
        let stats = GenerationStats::from_scores(self.history.len(), &scores);
        debug!(
            "generation {}: best {}, mean {:.1}, feasible {}/{}",
            stats.generation,
            stats.best_score,
            stats.mean_score,
            stats.feasible_count,
            scores.len()
        );

        let ranked = rank_descending(&scores);
        let mut next: Vec<P::Individual> = select_survivors(&ranked, rng)
            .into_iter()
            .map(|i| self.population[i].clone())
            .collect();
        let survivor_count = next.len();

        if survivor_count >= 2 {
            while next.len() < self.config.population_size {
                let pair = index::sample(rng, survivor_count, 2);
                let mut child =
                    self.problem
                        .crossover(&next[pair.index(0)], &next[pair.index(1)], rng);
                if rng.random_bool(self.config.mutation_rate) {
                    self.problem.mutate(&mut child, rng);
                }
                next.push(child);
            }
        }

        self.population = next;
        self.history.push(stats.clone());
        stats
    }

    /// Runs `generations` generations on the current population.
    pub fn evolve<R: Rng>(&mut self, generations: usize, rng: &mut R) {
        for _ in 0..generations {
            self.step(rng);
        }
    }

    /// Initialises, evolves, and returns the best individual with its score.
    pub fn run<R: Rng>(&mut self, generations: usize, rng: &mut R) -> (P::Individual, i32) {
        info!(
            "evolving population of {} for {} generations",
            self.config.population_size, generations
        );
        self.initialize(rng);
        self.evolve(generations, rng);

        let scores = self.score_population();
        // population_size >= 4 after validation, so there is always a best.
        let best = first_best(&scores).unwrap_or(0);
        info!("best score after {} generations: {}", generations, scores[best]);
        (self.population[best].clone(), scores[best])
    }

    /// Best individual of the current population, first-seen on ties.
    pub fn best(&self) -> Option<(&P::Individual, i32)> {
        let scores = self.score_population();
        first_best(&scores).map(|i| (&self.population[i], scores[i]))
    }

    pub fn population(&self) -> &[P::Individual] {
        &self.population
    }

    /// Statistics of every generation run since the last `initialize`.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Consumes the engine, returning its generation history.
    pub fn into_history(self) -> Vec<GenerationStats> {
        self.history
    }

    fn score_population(&self) -> Vec<i32> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                use rayon::prelude::*;
                return self
                    .population
                    .par_iter()
                    .map(|ind| self.problem.evaluate(ind))
                    .collect();
            }
        }
        self.population
            .iter()
            .map(|ind| self.problem.evaluate(ind))
            .collect()
    }
}
