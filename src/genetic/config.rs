//! Genetic search configuration.

use crate::error::{TspError, TspResult};
use crate::sampling::DEFAULT_MAX_EVALUATIONS;

/// Default number of ordered pairs bred per generation under
/// [`Pairing::Capped`].
pub const DEFAULT_PAIR_CAP: usize = 10_000;

/// How parents are paired each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pairing {
    /// Every ordered pair, including a tour with itself.
    ///
    /// A population of size `p` yields `p²` children, so size after `g`
    /// generations is `p^(2^g)`.
    Full,

    /// Every ordered pair while there are at most `k` of them, otherwise `k`
    /// ordered pairs drawn uniformly with replacement.
    Capped(usize),
}

impl Default for Pairing {
    fn default() -> Self {
        Pairing::Capped(DEFAULT_PAIR_CAP)
    }
}

impl Pairing {
    /// Number of children bred from a population of `size`.
    pub fn children(&self, size: u128) -> u128 {
        let full = size.saturating_mul(size);
        match *self {
            Pairing::Full => full,
            Pairing::Capped(k) => full.min(k as u128),
        }
    }
}

/// Configuration for [`GeneticSearch`](super::GeneticSearch).
///
/// # Defaults
///
/// ```
/// use u_tsp::genetic::{GeneticConfig, Pairing};
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert!((config.mutation_rate - 0.1).abs() < 1e-12);
/// assert_eq!(config.pairing, Pairing::Capped(10_000));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::genetic::{GeneticConfig, Pairing};
///
/// let config = GeneticConfig::default()
///     .with_population_size(4)
///     .with_generations(2)
///     .with_pairing(Pairing::Full)
///     .with_seed(42);
/// assert_eq!(config.estimated_evaluations(), 16 + 256);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneticConfig {
    /// Size of the initial random population.
    pub population_size: usize,

    /// Number of generations to breed.
    pub generations: usize,

    /// Probability of swap-mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent pairing scheme.
    pub pairing: Pairing,

    /// Rewrite children into permutations after crossover and mutation.
    ///
    /// Off by default: children may contain repeated or missing cities.
    pub repair: bool,

    /// Refuse to start when [`estimated_evaluations`](Self::estimated_evaluations)
    /// exceeds this.
    pub max_evaluations: u64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked after every child, so a run stops mid-generation.
    pub time_limit_ms: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_rate: 0.1,
            pairing: Pairing::default(),
            repair: false,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation probability. Not clamped; see [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the pairing scheme.
    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// Enables or disables child repair.
    pub fn with_repair(mut self, repair: bool) -> Self {
        self.repair = repair;
        self
    }

    /// Sets the evaluation guard.
    pub fn with_max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size == 0 {
            return Err(TspError::config("population_size must be at least 1"));
        }
        if self.generations == 0 {
            return Err(TspError::config("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.pairing == Pairing::Capped(0) {
            return Err(TspError::config("pair cap must be at least 1"));
        }
        if self.max_evaluations == 0 {
            return Err(TspError::config("max_evaluations must be at least 1"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(TspError::config("time_limit_ms must be positive or None"));
        }
        Ok(())
    }

    /// Total children a full run will evaluate, saturating at `u128::MAX`.
    pub fn estimated_evaluations(&self) -> u128 {
        let mut size = self.population_size as u128;
        let mut total = 0u128;
        for generation in 0..self.generations {
            let children = self.pairing.children(size);
            if children == size {
                // Fixed point: every remaining generation breeds the same count.
                let remaining = (self.generations - generation) as u128;
                return total.saturating_add(children.saturating_mul(remaining));
            }
            total = total.saturating_add(children);
            if total == u128::MAX {
                break;
            }
            size = children;
        }
        total
    }

    /// Population size after each generation, for inspection.
    pub fn population_sizes(&self) -> impl Iterator<Item = u128> + '_ {
        let mut size = self.population_size as u128;
        (0..self.generations).map(move |_| {
            size = self.pairing.children(size);
            size
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let config = GeneticConfig::default()
            .with_population_size(20)
            .with_generations(5)
            .with_mutation_rate(0.25)
            .with_pairing(Pairing::Full)
            .with_repair(true)
            .with_max_evaluations(1_000_000)
            .with_seed(42)
            .with_time_limit_ms(100);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 5);
        assert!((config.mutation_rate - 0.25).abs() < 1e-12);
        assert_eq!(config.pairing, Pairing::Full);
        assert!(config.repair);
        assert_eq!(config.max_evaluations, 1_000_000);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(100));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GeneticConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GeneticConfig::default().with_population_size(0);
        assert!(matches!(config.validate(), Err(TspError::Config { .. })));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GeneticConfig::default().with_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_rate_range() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let config = GeneticConfig::default().with_mutation_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} accepted");
        }
        for rate in [0.0, 1.0] {
            let config = GeneticConfig::default().with_mutation_rate(rate);
            assert!(config.validate().is_ok(), "rate {rate} rejected");
        }
    }

    #[test]
    fn test_validate_zero_cap() {
        let config = GeneticConfig::default().with_pairing(Pairing::Capped(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_pairing_squares() {
        let config = GeneticConfig::default()
            .with_population_size(2)
            .with_generations(3)
            .with_pairing(Pairing::Full);
        let sizes: Vec<u128> = config.population_sizes().collect();
        assert_eq!(sizes, vec![4, 16, 256]);
        assert_eq!(config.estimated_evaluations(), 4 + 16 + 256);
    }

    #[test]
    fn test_full_pairing_saturates() {
        let config = GeneticConfig::default().with_pairing(Pairing::Full);
        assert_eq!(config.estimated_evaluations(), u128::MAX);
    }

    #[test]
    fn test_default_estimate() {
        // 100² = 10 000 pairs in the first generation, capped at 10 000 after.
        assert_eq!(GeneticConfig::default().estimated_evaluations(), 1_000_000);
    }

    #[test]
    fn test_capped_pairing() {
        let config = GeneticConfig::default()
            .with_population_size(10)
            .with_generations(3)
            .with_pairing(Pairing::Capped(50));
        let sizes: Vec<u128> = config.population_sizes().collect();
        assert_eq!(sizes, vec![50, 50, 50]);
        assert_eq!(config.estimated_evaluations(), 150);
    }

    #[test]
    fn test_population_of_one_is_a_fixed_point() {
        let config = GeneticConfig::default()
            .with_population_size(1)
            .with_generations(1_000_000)
            .with_pairing(Pairing::Full);
        assert_eq!(config.estimated_evaluations(), 1_000_000);
    }
}
