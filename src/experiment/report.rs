//! Experiment results and their text renderings.

use serde::Serialize;
use std::fmt::Write as _;

/// Outcome of one independent run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    /// Objective of the fittest solution after the last generation.
    pub best_objective: f64,

    /// Best objective sampled at each checkpoint generation.
    pub trace: Vec<f64>,

    pub elapsed_ms: u64,
}

/// Aggregated outcome of an experiment on one instance.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport<S> {
    /// Algorithm label, see [`Algorithm::label`](crate::ea::Algorithm::label).
    pub label: String,
    pub population_size: usize,
    pub generations: usize,
    pub runs: Vec<RunRecord>,

    /// Best final solution across all runs.
    pub best: S,

    /// Mean of the per-run best objectives.
    pub mean: f64,

    /// Population standard deviation of the per-run best objectives.
    pub std_dev: f64,
}

impl<S> ExperimentReport<S> {
    pub(crate) fn new(
        label: String,
        population_size: usize,
        generations: usize,
        runs: Vec<RunRecord>,
        best: S,
    ) -> Self {
        let values: Vec<f64> = runs.iter().map(|r| r.best_objective).collect();
        let (mean, std_dev) = mean_and_std_dev(&values);
        Self {
            label,
            population_size,
            generations,
            runs,
            best,
            mean,
            std_dev,
        }
    }

    /// File name stem for the experiment artifacts,
    /// `"{label},pop_{N},gen_{G},runs_{R}"`.
    pub fn artifact_stem(&self) -> String {
        format!(
            "{},pop_{},gen_{},runs_{}",
            self.label,
            self.population_size,
            self.generations,
            self.runs.len()
        )
    }

    /// Human-readable results block for one instance.
    pub fn results_text(&self, instance: &str) -> String {
        let costs: Vec<String> = self
            .runs
            .iter()
            .map(|r| r.best_objective.to_string())
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "Input: {instance}");
        let _ = writeln!(out, "Costs:");
        let _ = writeln!(out, "{}", costs.join(","));
        let _ = writeln!(out, "Mean cost: {}", self.mean);
        let _ = writeln!(out, "Std Deviation: {}", self.std_dev);
        out
    }

    /// One CSV row per run: instance name followed by the trace.
    pub fn trace_csv(&self, instance: &str) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str(instance);
            for value in &run.trace {
                let _ = write!(out, ",{value}");
            }
            out.push('\n');
        }
        out
    }
}

/// Mean and population standard deviation. `(0, 0)` for no values.
pub fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
