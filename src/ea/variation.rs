//! Variation operator contracts.
//!
//! Concrete crossover and mutation operators depend on the solution
//! encoding and live with the problem collaborator. The engine only needs
//! these two signatures. Operators return new, already evaluated
//! solutions; an `Err` aborts the generation.

use super::types::Solution;
use rand::RngCore;

/// Recombines two parents into one or more offspring.
///
/// Returning an empty `Vec` is a contract violation and is reported as
/// [`EaError::EmptyOffspring`](crate::EaError::EmptyOffspring).
pub trait Crossover<S: Solution>: Send + Sync {
    /// Short identifier, used in the algorithm label.
    fn name(&self) -> &str;

    fn apply(&self, parent_a: &S, parent_b: &S, rng: &mut dyn RngCore)
        -> anyhow::Result<Vec<S>>;
}

/// Produces a perturbed copy of one individual.
pub trait Mutation<S: Solution>: Send + Sync {
    /// Short identifier, used in the algorithm label.
    fn name(&self) -> &str;

    fn apply(&self, individual: &S, rng: &mut dyn RngCore) -> anyhow::Result<S>;
}

/// Identity mutation: returns a clone of its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMutation;

impl<S: Solution> Mutation<S> for NoMutation {
    fn name(&self) -> &str {
        "none"
    }

    fn apply(&self, individual: &S, _rng: &mut dyn RngCore) -> anyhow::Result<S> {
        Ok(individual.clone())
    }
}
