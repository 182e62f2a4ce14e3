//! Experiment configuration.
//!
//! [`ExperimentConfig`] is the file-level configuration of a benchmark:
//! run counts, population parameters, and operator names. Keys are
//! kebab-case and flat, so a configuration file reads like:
//!
//! ```json
//! {
//!   "population-size": 50,
//!   "generations": 2000,
//!   "runs": 10,
//!   "crossover": "order",
//!   "mutation": "swap",
//!   "parent-selection": "tournament",
//!   "survivor-selection": "windowed-fps"
//! }
//! ```
//!
//! `population` and `mutate` are accepted as aliases of `population-size`
//! and `mutation`. Any other key is rejected.

use crate::ea::{EvolutionConfig, OperatorConfig};
use crate::error::{EaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every key a configuration file may contain, aliases included.
const KNOWN_KEYS: &[&str] = &[
    "population-size",
    "population",
    "generations",
    "runs",
    "checkpoint-interval",
    "parallel",
    "worker-threads",
    "seed",
    "crossover",
    "mutation",
    "mutate",
    "parent-selection",
    "survivor-selection",
];

/// Parameters of a repeated-run experiment.
///
/// Every field is optional in the file; missing ones take the defaults
/// shown by [`ExperimentConfig::default`].
///
/// ```
/// use ttp_evo::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 2000);
/// assert_eq!(config.runs, 1);
/// assert_eq!(config.operators.mutation, "none");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExperimentConfig {
    /// Solutions per generation.
    #[serde(alias = "population")]
    pub population_size: usize,

    /// Generations per run.
    pub generations: usize,

    /// Independent runs per instance.
    pub runs: usize,

    /// Generation stride of the best-objective trace.
    pub checkpoint_interval: usize,

    /// Build offspring on a per-run worker pool.
    pub parallel: bool,

    /// Worker count for the parallel mode; `None` uses all cores.
    pub worker_threads: Option<usize>,

    /// Base seed. Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    #[serde(flatten)]
    pub operators: OperatorConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 2000,
            runs: 1,
            checkpoint_interval: 500,
            parallel: false,
            worker_threads: None,
            seed: None,
            operators: OperatorConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Parses a JSON configuration.
    ///
    /// Unknown keys are an error, so a misspelled operator never silently
    /// falls back to its default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(key) = value
            .as_object()
            .and_then(|map| map.keys().find(|key| !KNOWN_KEYS.contains(&key.as_str())))
        {
            return Err(EaError::InvalidConfig(format!(
                "unknown configuration key `{key}`"
            )));
        }
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_runs(mut self, n: usize) -> Self {
        self.runs = n;
        self
    }

    pub fn with_checkpoint_interval(mut self, n: usize) -> Self {
        self.checkpoint_interval = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_operators(mut self, operators: OperatorConfig) -> Self {
        self.operators = operators;
        self
    }

    /// Engine configuration for run number `run`.
    pub fn evolution_config(&self, run: usize) -> EvolutionConfig {
        let mut config = EvolutionConfig::default()
            .with_population_size(self.population_size)
            .with_parallel(self.parallel);
        if let Some(n) = self.worker_threads {
            config = config.with_worker_threads(n);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed.wrapping_add(run as u64));
        }
        config
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EaError::InvalidPopulationSize(0));
        }
        if self.generations == 0 {
            return Err(EaError::InvalidConfig("generations must be at least 1".into()));
        }
        if self.runs == 0 {
            return Err(EaError::InvalidConfig("runs must be at least 1".into()));
        }
        if self.checkpoint_interval == 0 {
            return Err(EaError::InvalidConfig(
                "checkpoint-interval must be at least 1".into(),
            ));
        }
        self.evolution_config(0).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = ExperimentConfig::from_json_str(
            r#"{
                "population-size": 20,
                "generations": 100,
                "runs": 5,
                "checkpoint-interval": 10,
                "parallel": true,
                "seed": 7,
                "crossover": "order",
                "mutation": "swap",
                "parent-selection": "tournament-4",
                "survivor-selection": "windowed-fps"
            }"#,
        )
        .unwrap();

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 100);
        assert_eq!(config.runs, 5);
        assert_eq!(config.checkpoint_interval, 10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.operators.crossover.as_deref(), Some("order"));
        assert_eq!(config.operators.mutation, "swap");
        assert_eq!(config.operators.parent_selection, "tournament-4");
        assert_eq!(config.operators.survivor_selection, "windowed-fps");
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = ExperimentConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ExperimentConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = ExperimentConfig::from_json_str("{ runs: }").unwrap_err();
        assert!(matches!(err, EaError::Json(_)));
    }

    #[test]
    fn test_legacy_key_names() {
        let config = ExperimentConfig::from_json_str(
            r#"{ "population": 10, "mutate": "swap", "parent-selection": "windowed-fps" }"#,
        )
        .unwrap();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.operators.mutation, "swap");
        assert_eq!(config.operators.parent_selection, "windowed-fps");
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let err = ExperimentConfig::from_json_str(r#"{ "mutaton": "swap" }"#).unwrap_err();
        assert!(matches!(err, EaError::InvalidConfig(ref msg) if msg.contains("mutaton")));

        let err = ExperimentConfig::from_json_str(r#"{ "runs": 3, "populaton-size": 10 }"#)
            .unwrap_err();
        assert!(matches!(err, EaError::InvalidConfig(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = ExperimentConfig::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, EaError::Json(_)));
    }

    #[test]
    fn test_zero_runs_rejected() {
        let err = ExperimentConfig::from_json_str(r#"{ "runs": 0 }"#).unwrap_err();
        assert!(matches!(err, EaError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_zero_fields() {
        let base = ExperimentConfig::default();
        assert!(base.clone().with_population_size(0).validate().is_err());
        assert!(base.clone().with_generations(0).validate().is_err());
        assert!(base.clone().with_checkpoint_interval(0).validate().is_err());
        assert!(base.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = ExperimentConfig::from_path("/nonexistent/experiment.json").unwrap_err();
        assert!(matches!(err, EaError::Io(_)));
    }

    #[test]
    fn test_run_seeds_differ() {
        let config = ExperimentConfig::default()
            .with_seed(100)
            .with_parallel(true)
            .with_worker_threads(2);
        assert_eq!(config.evolution_config(0).seed, Some(100));
        assert_eq!(config.evolution_config(1).worker_threads, Some(2));
        assert_eq!(config.evolution_config(3).seed, Some(103));
        assert!(config.evolution_config(0).parallel);
        assert_eq!(ExperimentConfig::default().evolution_config(2).seed, None);
    }
}
