//! Crate-wide error type.
//!
//! Every failure is fatal to the run that produced it: the engine never
//! retries and never applies a partial generation.

use std::fmt;

/// The operator capability an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Crossover,
    Mutation,
    ParentSelection,
    SurvivorSelection,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperatorKind::Crossover => "crossover",
            OperatorKind::Mutation => "mutation",
            OperatorKind::ParentSelection => "parent-selection",
            OperatorKind::SurvivorSelection => "survivor-selection",
        };
        f.write_str(s)
    }
}

/// Errors raised by the evolutionary engine and the experiment driver.
#[derive(Debug, thiserror::Error)]
pub enum EaError {
    #[error("population size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown {kind} operator: {name:?}")]
    UnknownOperator { kind: OperatorKind, name: String },

    #[error("{role} selection returned {actual} solutions, expected {expected}")]
    SelectionLength {
        role: OperatorKind,
        expected: usize,
        actual: usize,
    },

    #[error("crossover operator {operator:?} produced no offspring")]
    EmptyOffspring { operator: String },

    #[error("evaluation failed: {0}")]
    Evaluation(#[from] anyhow::Error),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type used throughout the crate.
pub type Result<T> = std::result::Result<T, EaError>;
