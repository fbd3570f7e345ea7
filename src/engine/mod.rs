//! Population engine.
//!
//! Generic over [`GaProblem`](crate::ga::GaProblem): owns the population,
//! ranks it, selects survivors, breeds children and replaces the
//! population wholesale each generation.
//!
//! Scoring may run in parallel (`parallel` feature); every random draw
//! stays on the caller's generator, so a seeded run is reproducible either
//! way.

mod runner;
mod selection;

pub use runner::{GenerationStats, PopulationEngine};
pub use selection::{first_best, rank_descending, select_survivors};
