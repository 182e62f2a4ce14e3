//! Engine configuration.
//!
//! [`EvolutionConfig`] holds the parameters a [`Population`](super::Population)
//! needs besides its operators.

use crate::error::{EaError, Result};

/// Configuration for one evolving population.
///
/// # Defaults
///
/// ```
/// use ttp_evo::ea::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert!(!config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use ttp_evo::ea::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_parallel(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    /// Number of solutions kept at every generation boundary.
    pub population_size: usize,

    /// Whether offspring construction runs on a worker pool.
    ///
    /// Results are identical to the sequential mode for the same seed.
    pub parallel: bool,

    /// Worker count for the parallel mode.
    ///
    /// `None` sizes the pool to the available hardware parallelism.
    pub worker_threads: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            parallel: false,
            worker_threads: None,
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

    /// Enables or disables parallel offspring construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets an explicit worker count for the parallel mode.
    pub fn with_worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = Some(n);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of workers the parallel mode will spawn.
    pub fn effective_workers(&self) -> usize {
        self.worker_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EaError::InvalidPopulationSize(self.population_size));
        }
        if self.worker_threads == Some(0) {
            return Err(EaError::InvalidConfig(
                "worker_threads must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
