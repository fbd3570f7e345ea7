//! GA encoding and operators for timetabling.
//!
//! # Encoding
//!
//! The chromosome is the [`Timetable`](crate::models::Timetable) itself:
//! per batch, per day, a fixed-length sequence of period slots. Genes are
//! slots; a lesson gene carries subject, faculty and classroom, a break
//! gene carries nothing.
//!
//! # Submodules
//!
//! - [`chromosome`]: gene pool and random initialisation
//! - [`operators`]: batch-day crossover and single-slot mutation
//! - [`problem`]: [`TimetableProblem`], binding the encoding to fitness

pub mod chromosome;
pub mod operators;
pub mod problem;

use rand::Rng;

pub use chromosome::{random_timetable, GenePool};
pub use operators::{day_crossover, slot_mutation};
pub use problem::TimetableProblem;

/// A problem the population engine can evolve.
///
/// Higher scores are better. Implementations must be safe to evaluate
/// from several threads at once.
pub trait GaProblem: Sync {
    /// Candidate solution type. `Clone` must produce an independent copy.
    type Individual: Clone + Send + Sync;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual.
    fn evaluate(&self, individual: &Self::Individual) -> i32;

    /// Combines two parents into one child.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Perturbs an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}
