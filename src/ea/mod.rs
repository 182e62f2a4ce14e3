//! Generational evolutionary engine.
//!
//! A problem collaborator supplies evaluated candidates through
//! [`Instance`] and [`Solution`]; the engine evolves a fixed-size
//! [`Population`] of them with the operators bundled in an [`Algorithm`].
//!
//! # Core Traits
//!
//! - [`Solution`]: an evaluated candidate with a maximized objective
//! - [`Instance`]: produces random solutions
//! - [`SelectionMethod`]: parent and survivor selection
//! - [`Crossover`], [`Mutation`]: problem-specific variation
//!
//! # Key Types
//!
//! - [`Algorithm`]: immutable operator bundle with a textual label
//! - [`Registry`]: name → operator factories, resolves an [`OperatorConfig`]
//! - [`EvolutionConfig`]: population size, seed, parallel evaluation
//! - [`Population`]: the generation loop
//!
//! # Generation step
//!
//! 1. `parents = parent_selection(current)` (length N)
//! 2. crossover over consecutive parent pairs, or clone each parent
//! 3. mutate every offspring
//! 4. `next = survivor_selection(current ++ offspring)`, trailing N kept
//!
//! # References
//!
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*
//! - Bonyadi, Michalewicz & Barone (2013), "The travelling thief problem:
//!   The first step in the transition from theoretical problems to
//!   realistic problems"

mod algorithm;
mod config;
mod population;
mod registry;
mod selection;
mod types;
mod variation;

#[cfg(test)]
pub(crate) mod testing;

pub use algorithm::Algorithm;
pub use config::EvolutionConfig;
pub use population::Population;
pub use registry::{OperatorConfig, Registry};
pub use selection::{NoSelection, SelectionMethod, Tournament, WindowedFps};
pub use types::{Instance, Solution};
pub use variation::{Crossover, Mutation, NoMutation};
