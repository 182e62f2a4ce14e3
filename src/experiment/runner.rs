//! Repeated-run experiment execution.
//!
//! [`Experiment`] runs the same [`Algorithm`] several times on one
//! instance, sampling the best objective at checkpoint generations and
//! aggregating the final results into an [`ExperimentReport`].

use super::config::ExperimentConfig;
use super::report::{ExperimentReport, RunRecord};
use crate::ea::{Algorithm, Instance, Population, Registry, Solution};
use crate::error::{EaError, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

/// A configured algorithm plus the run parameters to drive it.
///
/// # Usage
///
/// ```ignore
/// let config = ExperimentConfig::from_path("experiment.json")?;
/// let experiment = Experiment::from_registry(config, &registry)?;
/// let report = experiment.run(&instance)?;
/// println!("{} mean: {}", report.label, report.mean);
/// ```
pub struct Experiment<S: Solution> {
    config: ExperimentConfig,
    algorithm: Arc<Algorithm<S>>,
}

impl<S: Solution + 'static> Experiment<S> {
    /// Validates `config` and pairs it with an already built algorithm.
    ///
    /// The operator names in `config` are ignored.
    pub fn new(config: ExperimentConfig, algorithm: Algorithm<S>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            algorithm: Arc::new(algorithm),
        })
    }

    /// Resolves the configured operator names through `registry`.
    ///
    /// Unknown names fail here, before anything runs.
    pub fn from_registry(config: ExperimentConfig, registry: &Registry<S>) -> Result<Self> {
        let algorithm = registry.build(&config.operators)?;
        Self::new(config, algorithm)
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn algorithm(&self) -> &Algorithm<S> {
        &self.algorithm
    }

    /// Executes every configured run on `instance`.
    ///
    /// Any failure aborts the whole experiment.
    #[instrument(
        level = "info",
        skip_all,
        fields(label = %self.algorithm, runs = self.config.runs)
    )]
    pub fn run<I>(&self, instance: &I) -> Result<ExperimentReport<S>>
    where
        I: Instance<Solution = S>,
    {
        let mut records = Vec::with_capacity(self.config.runs);
        let mut best: Option<S> = None;

        for run in 0..self.config.runs {
            let started = Instant::now();
            let (fittest, trace) = self.run_once(instance, run)?;
            let elapsed = started.elapsed();

            tracing::info!(
                run,
                best = fittest.objective(),
                seconds = elapsed.as_secs_f64(),
                "run complete"
            );

            records.push(RunRecord {
                best_objective: fittest.objective(),
                trace,
                elapsed_ms: elapsed.as_millis() as u64,
            });

            let improved = match &best {
                Some(current) => fittest.objective() > current.objective(),
                None => true,
            };
            if improved {
                best = Some(fittest);
            }
        }

        let best = best.ok_or_else(|| EaError::InvalidConfig("runs must be at least 1".into()))?;
        let report = ExperimentReport::new(
            self.algorithm.label(),
            self.config.population_size,
            self.config.generations,
            records,
            best,
        );
        tracing::info!(mean = report.mean, std_dev = report.std_dev, "experiment complete");
        Ok(report)
    }

    /// One run: returns the final fittest solution and the checkpoint trace.
    fn run_once<I>(&self, instance: &I, run: usize) -> Result<(S, Vec<f64>)>
    where
        I: Instance<Solution = S>,
    {
        let mut population = Population::with_config(
            instance,
            Arc::clone(&self.algorithm),
            &self.config.evolution_config(run),
        )?;

        let mut trace = Vec::new();
        for generation in 0..self.config.generations {
            population.evolve()?;
            if is_checkpoint(generation, self.config.checkpoint_interval) {
                trace.push(population.fittest().objective());
            }
        }
        Ok((population.fittest().clone(), trace))
    }
}

/// Sampling rule for the trace: the second generation, then every
/// `interval`-th generation counting from the first.
fn is_checkpoint(generation: usize, interval: usize) -> bool {
    generation == 1 || generation % interval == 0
}
