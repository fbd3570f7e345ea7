//! Scheduler configuration.
//!
//! [`SchedulerConfig`] groups the week layout, the evolutionary loop
//! parameters, and the opt-in constraint extensions. Every field has a
//! default, so a partial JSON document deserializes into a complete config.
//!
//! # Defaults
//!
//! ```
//! use u_timetable::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::default();
//! assert_eq!(config.week.periods_per_day, 6);
//! assert_eq!(config.evolution.population_size, 10);
//! assert_eq!(config.evolution.generations, 50);
//! assert!(!config.constraints.cross_batch_conflicts);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::models::WeekLayout;

/// Complete configuration for one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Days, periods and break placement.
    pub week: WeekLayout,
    /// Population and operator parameters.
    pub evolution: EvolutionConfig,
    /// Constraint extensions beyond the per-batch checks.
    pub constraints: ConstraintPolicy,
}

/// Parameters of the evolutionary loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Candidates per generation. Must be at least 4.
    pub population_size: usize,
    /// Generations to run.
    pub generations: usize,
    /// Probability that a child receives one slot mutation (0.0–1.0).
    pub mutation_rate: f64,
    /// Probability that crossover takes a batch-day from the first parent.
    pub crossover_bias: f64,
    /// Whether to score candidates in parallel (needs the `parallel` feature).
    pub parallel: bool,
    /// Random seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Opt-in hard constraints. Both are off by default, which keeps every
/// batch's timetable independent of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintPolicy {
    /// Reject two batches sharing a faculty or classroom in the same period.
    pub cross_batch_conflicts: bool,
    /// Reject a faculty teaching more than its `max_classes_per_day`.
    pub faculty_daily_limit: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 50,
            mutation_rate: 0.2,
            crossover_bias: 0.5,
            parallel: true,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover bias toward the first parent.
    pub fn with_crossover_bias(mut self, bias: f64) -> Self {
        self.crossover_bias = bias.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of survivors kept per generation: the top quarter plus a
    /// random quarter of the rest, each `population_size / 4` (truncated).
    #[inline]
    pub fn survivor_count(&self) -> usize {
        2 * (self.population_size / 4)
    }

    /// Validates the loop parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.survivor_count() < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        for (name, value) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_bias", self.crossover_bias),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

impl SchedulerConfig {
    /// Sets the week layout.
    pub fn with_week(mut self, week: WeekLayout) -> Self {
        self.week = week;
        self
    }

    /// Sets the evolution parameters.
    pub fn with_evolution(mut self, evolution: EvolutionConfig) -> Self {
        self.evolution = evolution;
        self
    }

    /// Sets the constraint policy.
    pub fn with_constraints(mut self, constraints: ConstraintPolicy) -> Self {
        self.constraints = constraints;
        self
    }

    /// Validates layout and loop parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let week = &self.week;
        if week.periods_per_day == 0 {
            return Err(ConfigError::NoPeriods);
        }
        if week.days.is_empty() {
            return Err(ConfigError::NoDays);
        }
        let mut seen = HashSet::new();
        for day in &week.days {
            if !seen.insert(*day) {
                return Err(ConfigError::DuplicateDay(day.to_string()));
            }
        }
        self.evolution.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_default_config() {
        let config = SchedulerConfig::default();
        assert_eq!(config.week.days.len(), 5);
        assert_eq!(config.week.break_positions, vec![2, 3]);
        assert!((config.evolution.mutation_rate - 0.2).abs() < 1e-10);
        assert!((config.evolution.crossover_bias - 0.5).abs() < 1e-10);
        assert!(config.evolution.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let evo = EvolutionConfig::default()
            .with_population_size(40)
            .with_generations(200)
            .with_mutation_rate(1.7)
            .with_crossover_bias(-0.1)
            .with_parallel(false)
            .with_seed(7);

        assert_eq!(evo.population_size, 40);
        assert_eq!(evo.generations, 200);
        assert!((evo.mutation_rate - 1.0).abs() < 1e-10);
        assert!((evo.crossover_bias - 0.0).abs() < 1e-10);
        assert!(!evo.parallel);
        assert_eq!(evo.seed, Some(7));
    }

    #[test]
    fn test_survivor_count_truncates() {
        let survivors = |n| EvolutionConfig::default().with_population_size(n).survivor_count();
        assert_eq!(survivors(10), 4);
        assert_eq!(survivors(8), 4);
        assert_eq!(survivors(7), 2);
        assert_eq!(survivors(4), 2);
        assert_eq!(survivors(3), 0);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = SchedulerConfig::default()
            .with_evolution(EvolutionConfig::default().with_population_size(3));
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(3)));
    }

    #[test]
    fn test_validate_rates() {
        let mut evo = EvolutionConfig::default();
        evo.mutation_rate = 1.5;
        assert!(matches!(
            evo.validate(),
            Err(ConfigError::RateOutOfRange { name: "mutation_rate", .. })
        ));

        let json = r#"{"evolution": {"crossover_bias": -0.5}}"#;
        let config: SchedulerConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange { name: "crossover_bias", .. })
        ));
    }

    #[test]
    fn test_validate_layout() {
        let no_periods =
            SchedulerConfig::default().with_week(WeekLayout::default().with_periods_per_day(0));
        assert_eq!(no_periods.validate(), Err(ConfigError::NoPeriods));

        let no_days = SchedulerConfig::default().with_week(WeekLayout::default().with_days(vec![]));
        assert_eq!(no_days.validate(), Err(ConfigError::NoDays));

        let dup = SchedulerConfig::default().with_week(
            WeekLayout::default().with_days(vec![Weekday::Monday, Weekday::Monday]),
        );
        assert!(matches!(dup.validate(), Err(ConfigError::DuplicateDay(_))));

        // Days too short for any break position are valid; they just cannot
        // score above 0.
        let short = SchedulerConfig::default().with_week(WeekLayout::default().with_periods_per_day(2));
        assert_eq!(short.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_config() {
        let json = r#"{
            "week": {"days": ["Monday", "Tuesday"], "periods_per_day": 4},
            "evolution": {"seed": 42},
            "constraints": {"cross_batch_conflicts": true}
        }"#;
        let config: SchedulerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.week.days, vec![Weekday::Monday, Weekday::Tuesday]);
        assert_eq!(config.week.break_positions, vec![2, 3]);
        assert_eq!(config.evolution.population_size, 10);
        assert_eq!(config.evolution.seed, Some(42));
        assert!(config.constraints.cross_batch_conflicts);
        assert!(!config.constraints.faculty_daily_limit);
    }
}
