//! Name-keyed operator factories.
//!
//! A [`Registry`] maps string identifiers to constructors for each of the
//! four operator capabilities. Drivers populate it once at start-up, then
//! resolve an [`OperatorConfig`] into an [`Algorithm`]. Unknown names are
//! rejected before any generation runs.
//!
//! # Built-in names
//!
//! | Capability | Names |
//! |------------|-------|
//! | mutation | `none` |
//! | parent / survivor selection | `none`, `windowed-fps`, `tournament`, `tournament-<k>` |
//!
//! Crossover has no built-in: leaving it unconfigured clones parents.

use super::algorithm::Algorithm;
use super::selection::{NoSelection, SelectionMethod, Tournament, WindowedFps};
use super::types::Solution;
use super::variation::{Crossover, Mutation, NoMutation};
use crate::error::{EaError, OperatorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

type Factory<T> = Box<dyn Fn() -> Box<T> + Send + Sync>;

/// Operator names for one algorithm, as read from a configuration file.
///
/// Missing fields fall back to the identity variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OperatorConfig {
    /// `None` disables crossover.
    pub crossover: Option<String>,
    #[serde(alias = "mutate")]
    pub mutation: String,
    pub parent_selection: String,
    pub survivor_selection: String,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            crossover: None,
            mutation: "none".into(),
            parent_selection: "none".into(),
            survivor_selection: "none".into(),
        }
    }
}

/// Factories for crossover, mutation, and both selection roles.
pub struct Registry<S: Solution> {
    crossovers: HashMap<String, Factory<dyn Crossover<S>>>,
    mutations: HashMap<String, Factory<dyn Mutation<S>>>,
    parent_selections: HashMap<String, Factory<dyn SelectionMethod<S>>>,
    survivor_selections: HashMap<String, Factory<dyn SelectionMethod<S>>>,
}

impl<S: Solution + 'static> Registry<S> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            crossovers: HashMap::new(),
            mutations: HashMap::new(),
            parent_selections: HashMap::new(),
            survivor_selections: HashMap::new(),
        }
    }

    /// A registry holding the built-in operators listed in the module docs.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register_mutation("none", || Box::new(NoMutation))
            .register_parent_selection("none", || Box::new(NoSelection))
            .register_parent_selection("windowed-fps", || Box::new(WindowedFps))
            .register_parent_selection("tournament", || Box::new(Tournament::default()))
            .register_survivor_selection("none", || Box::new(NoSelection))
            .register_survivor_selection("windowed-fps", || Box::new(WindowedFps))
            .register_survivor_selection("tournament", || Box::new(Tournament::default()));
        registry
    }

    pub fn register_crossover<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Crossover<S>> + Send + Sync + 'static,
    {
        self.crossovers.insert(name.to_string(), Box::new(factory));
        self
    }

    pub fn register_mutation<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Mutation<S>> + Send + Sync + 'static,
    {
        self.mutations.insert(name.to_string(), Box::new(factory));
        self
    }

    pub fn register_parent_selection<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn SelectionMethod<S>> + Send + Sync + 'static,
    {
        self.parent_selections
            .insert(name.to_string(), Box::new(factory));
        self
    }

    pub fn register_survivor_selection<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn SelectionMethod<S>> + Send + Sync + 'static,
    {
        self.survivor_selections
            .insert(name.to_string(), Box::new(factory));
        self
    }

    pub fn crossover(&self, name: &str) -> Result<Box<dyn Crossover<S>>> {
        lookup(&self.crossovers, OperatorKind::Crossover, name)
    }

    pub fn mutation(&self, name: &str) -> Result<Box<dyn Mutation<S>>> {
        lookup(&self.mutations, OperatorKind::Mutation, name)
    }

    /// Resolves a selection method for `role`.
    ///
    /// `tournament-<k>` is accepted for any `k >= 1` without registration.
    pub fn selection(&self, role: OperatorKind, name: &str) -> Result<Box<dyn SelectionMethod<S>>> {
        let map = match role {
            OperatorKind::ParentSelection => &self.parent_selections,
            OperatorKind::SurvivorSelection => &self.survivor_selections,
            OperatorKind::Crossover | OperatorKind::Mutation => {
                return Err(EaError::InvalidConfig(format!(
                    "{role} is not a selection role"
                )))
            }
        };
        if let Some(factory) = map.get(name) {
            return Ok(factory());
        }
        match parse_tournament(name) {
            Some(k) => Ok(Box::new(Tournament::new(k))),
            None => Err(EaError::UnknownOperator {
                kind: role,
                name: name.to_string(),
            }),
        }
    }

    /// Builds a fresh [`Algorithm`] from configured names.
    pub fn build(&self, config: &OperatorConfig) -> Result<Algorithm<S>> {
        let crossover = config
            .crossover
            .as_deref()
            .map(|name| self.crossover(name))
            .transpose()?;
        let algorithm = Algorithm::new(
            crossover,
            self.mutation(&config.mutation)?,
            self.selection(OperatorKind::ParentSelection, &config.parent_selection)?,
            self.selection(OperatorKind::SurvivorSelection, &config.survivor_selection)?,
        );
        tracing::debug!(label = %algorithm, "algorithm built");
        Ok(algorithm)
    }
}

impl<S: Solution + 'static> Default for Registry<S> {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn lookup<T: ?Sized>(
    map: &HashMap<String, Factory<T>>,
    kind: OperatorKind,
    name: &str,
) -> Result<Box<T>> {
    map.get(name)
        .map(|factory| factory())
        .ok_or_else(|| EaError::UnknownOperator {
            kind,
            name: name.to_string(),
        })
}

/// `tournament-<k>` with `k >= 1`.
fn parse_tournament(name: &str) -> Option<usize> {
    name.strip_prefix("tournament-")?
        .parse()
        .ok()
        .filter(|&k| k >= 1)
}
