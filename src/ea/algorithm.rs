//! The immutable operator bundle driving a run.

use super::selection::{NoSelection, SelectionMethod};
use super::types::Solution;
use super::variation::{Crossover, Mutation, NoMutation};
use std::fmt;

/// One instance of each operator kind.
///
/// Built once per experiment and shared read-only (behind an `Arc`) by
/// every [`Population`](super::Population) it drives. An absent crossover
/// means parents are cloned into offspring unchanged.
///
/// # Examples
///
/// ```
/// use ttp_evo::ea::{Algorithm, NoMutation, NoSelection, WindowedFps};
/// # #[derive(Clone)] struct Tour(f64);
/// # impl ttp_evo::ea::Solution for Tour { fn objective(&self) -> f64 { self.0 } }
///
/// let algorithm: Algorithm<Tour> = Algorithm::new(
///     None,
///     Box::new(NoMutation),
///     Box::new(NoSelection),
///     Box::new(WindowedFps),
/// );
/// assert_eq!(algorithm.label(), "none,none,none,windowed-fps");
/// ```
pub struct Algorithm<S: Solution> {
    crossover: Option<Box<dyn Crossover<S>>>,
    mutation: Box<dyn Mutation<S>>,
    parent_selection: Box<dyn SelectionMethod<S>>,
    survivor_selection: Box<dyn SelectionMethod<S>>,
}

impl<S: Solution> Algorithm<S> {
    pub fn new(
        crossover: Option<Box<dyn Crossover<S>>>,
        mutation: Box<dyn Mutation<S>>,
        parent_selection: Box<dyn SelectionMethod<S>>,
        survivor_selection: Box<dyn SelectionMethod<S>>,
    ) -> Self {
        Self {
            crossover,
            mutation,
            parent_selection,
            survivor_selection,
        }
    }

    /// Every operator set to its identity variant.
    pub fn identity() -> Self {
        Self::new(
            None,
            Box::new(NoMutation),
            Box::new(NoSelection),
            Box::new(NoSelection),
        )
    }

    pub fn crossover(&self) -> Option<&dyn Crossover<S>> {
        self.crossover.as_deref()
    }

    pub fn mutation(&self) -> &dyn Mutation<S> {
        self.mutation.as_ref()
    }

    pub fn parent_selection(&self) -> &dyn SelectionMethod<S> {
        self.parent_selection.as_ref()
    }

    pub fn survivor_selection(&self) -> &dyn SelectionMethod<S> {
        self.survivor_selection.as_ref()
    }

    /// Stable label built from the operator names, in the order
    /// crossover, mutation, parent selection, survivor selection.
    pub fn label(&self) -> String {
        format!(
            "{},{},{},{}",
            self.crossover.as_ref().map_or("none", |c| c.name()),
            self.mutation.name(),
            self.parent_selection.name(),
            self.survivor_selection.name(),
        )
    }
}

impl<S: Solution> fmt::Display for Algorithm<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl<S: Solution> fmt::Debug for Algorithm<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("label", &self.label())
            .finish()
    }
}
