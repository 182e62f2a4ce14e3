//! Problem collaborator contracts.
//!
//! The engine never looks inside a candidate. It needs exactly two things
//! from the problem side: a scalar objective per [`Solution`], and a way
//! to draw random solutions from an [`Instance`].

use rand::RngCore;

/// An evaluated candidate solution.
///
/// The objective is **maximized**. Implementations compute it once, when
/// the solution is built, and never change it afterwards: every variation
/// produces a new value instead of editing an existing one.
///
/// # Implementing
///
/// ```
/// use ttp_evo::ea::Solution;
///
/// #[derive(Clone)]
/// struct Packing {
///     picked: Vec<bool>,
///     profit: f64,
/// }
///
/// impl Solution for Packing {
///     fn objective(&self) -> f64 {
///         self.profit
///     }
/// }
/// ```
pub trait Solution: Clone + Send + Sync {
    /// Scalar objective value. Higher is better.
    fn objective(&self) -> f64;
}

/// A problem instance able to produce random, already evaluated solutions.
///
/// `Send + Sync` because the engine may request offspring from worker
/// threads when parallel evaluation is enabled.
pub trait Instance: Send + Sync {
    /// The solution type this instance produces.
    type Solution: Solution;

    /// Creates a random solution.
    ///
    /// Errors are fatal to the run and surface as
    /// [`EaError::Evaluation`](crate::EaError::Evaluation).
    fn random_solution(&self, rng: &mut dyn RngCore) -> anyhow::Result<Self::Solution>;
}
