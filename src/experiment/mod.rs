//! Experiment driver.
//!
//! Repeats a configured [`Algorithm`](crate::ea::Algorithm) over several
//! independent runs on one instance and summarizes the outcome: per-run
//! best objective, mean and standard deviation, and a best-objective
//! trace sampled at checkpoint generations.
//!
//! Reading instance files and writing reports stay with the caller;
//! [`ExperimentReport`] renders its artifacts as strings.

mod config;
mod report;
mod runner;

pub use config::ExperimentConfig;
pub use report::{mean_and_std_dev, ExperimentReport, RunRecord};
pub use runner::Experiment;
