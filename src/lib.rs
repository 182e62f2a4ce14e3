//! Evolutionary-algorithm harness for the Traveling Thief Problem.
//!
//! The crate is split in two layers:
//!
//! - [`ea`]: the generational engine. A problem collaborator supplies
//!   evaluated candidates; the engine evolves a fixed-size population
//!   with pluggable parent selection, crossover, mutation, and survivor
//!   selection, including windowed fitness-proportional selection.
//! - [`experiment`]: the driver side. Resolves operator names from a
//!   configuration file, repeats runs, and aggregates statistics.
//!
//! # Architecture
//!
//! The engine contains no Traveling Thief concepts. Tour and packing
//! encodings, objective computation, instance parsing, and
//! problem-specific operators (order crossover, swap mutation, ...) are
//! implemented by consumers against the traits in [`ea`].

pub mod ea;
mod error;
pub mod experiment;
pub mod rng;

pub use error::{EaError, OperatorKind, Result};
