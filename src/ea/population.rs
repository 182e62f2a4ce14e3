//! Population lifecycle and the generation loop.
//!
//! [`Population`] owns a fixed-size generation and advances it one step
//! per [`evolve`](Population::evolve) call:
//! parent selection → crossover → mutation → survivor selection → swap.

use super::algorithm::Algorithm;
use super::config::EvolutionConfig;
use super::types::{Instance, Solution};
use crate::error::{EaError, OperatorKind, Result};
use crate::rng::{create_rng, entropy_rng};
use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// A fixed-size generation of solutions plus the operators that evolve it.
///
/// The size `N` chosen at construction holds at every generation
/// boundary. A failed [`evolve`](Self::evolve) leaves the previous
/// generation in place.
///
/// # Usage
///
/// ```ignore
/// let algorithm = Arc::new(registry.build(&operators)?);
/// let mut population = Population::new(&instance, 50, algorithm)?;
/// for _ in 0..2000 {
///     population.evolve()?;
/// }
/// println!("best: {}", population.fittest().objective());
/// ```
pub struct Population<S: Solution> {
    members: Vec<S>,
    algorithm: Arc<Algorithm<S>>,
    generation: usize,
    rng: StdRng,
    /// Present only in parallel mode; dropped together with the population.
    pool: Option<ThreadPool>,
}

impl<S: Solution> Population<S> {
    /// Seeds `size` random solutions from `instance`, sequential mode.
    pub fn new<I>(instance: &I, size: usize, algorithm: Arc<Algorithm<S>>) -> Result<Self>
    where
        I: Instance<Solution = S>,
    {
        let config = EvolutionConfig::default().with_population_size(size);
        Self::with_config(instance, algorithm, &config)
    }

    /// Seeds a population according to `config`.
    ///
    /// Fails on an invalid configuration, when the worker pool cannot be
    /// built, or when the instance cannot produce a solution.
    pub fn with_config<I>(
        instance: &I,
        algorithm: Arc<Algorithm<S>>,
        config: &EvolutionConfig,
    ) -> Result<Self>
    where
        I: Instance<Solution = S>,
    {
        config.validate()?;

        let mut rng = config.seed.map_or_else(entropy_rng, create_rng);

        let members = (0..config.population_size)
            .map(|_| instance.random_solution(&mut rng))
            .collect::<anyhow::Result<Vec<S>>>()?;

        let pool = if config.parallel {
            let workers = config.effective_workers();
            tracing::debug!(workers, "starting evaluation pool");
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("ttp-evo-worker-{i}"))
                    .build()?,
            )
        } else {
            None
        };

        Ok(Self {
            members,
            algorithm,
            generation: 0,
            rng,
            pool,
        })
    }

    /// Advances the population by exactly one generation.
    ///
    /// Any operator failure aborts the step; the current generation is
    /// kept and the error is returned.
    pub fn evolve(&mut self) -> Result<()> {
        let n = self.members.len();
        let algorithm = Arc::clone(&self.algorithm);

        let parents = algorithm
            .parent_selection()
            .select(&self.members, &mut self.rng);
        check_length(OperatorKind::ParentSelection, n, parents.len())?;

        let offspring = breed(&algorithm, &parents, &mut self.rng, self.pool.as_ref())?;

        let mut combined = Vec::with_capacity(2 * n);
        combined.extend_from_slice(&self.members);
        combined.extend(offspring);

        let survivors = algorithm
            .survivor_selection()
            .select(&combined, &mut self.rng);
        check_length(OperatorKind::SurvivorSelection, combined.len(), survivors.len())?;

        // Trailing N: with identity survivor selection the offspring
        // replace their parents.
        self.members = survivors.into_iter().skip(n).collect();
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            best = self.fittest().objective(),
            "generation complete"
        );
        Ok(())
    }

    /// The member with the highest objective; ties go to the earliest.
    pub fn fittest(&self) -> &S {
        let mut best = &self.members[0];
        for candidate in &self.members[1..] {
            let (c, b) = (candidate.objective(), best.objective());
            if c > b || (b.is_nan() && !c.is_nan()) {
                best = candidate;
            }
        }
        best
    }

    /// Current generation, in order.
    pub fn members(&self) -> &[S] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: a population holds at least one solution.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn algorithm(&self) -> &Arc<Algorithm<S>> {
        &self.algorithm
    }

    /// Whether offspring are built on a worker pool.
    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }
}

fn check_length(role: OperatorKind, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(EaError::SelectionLength {
            role,
            expected,
            actual,
        })
    }
}

/// Builds exactly `parents.len()` mutated offspring.
///
/// Work is split into units (one crossover pair, or one cloned parent)
/// that each get a generator seeded from `rng` before dispatch, so the
/// result does not depend on whether a pool is used.
fn breed<S: Solution>(
    algorithm: &Algorithm<S>,
    parents: &[S],
    rng: &mut StdRng,
    pool: Option<&ThreadPool>,
) -> Result<Vec<S>> {
    let n = parents.len();
    let mutation = algorithm.mutation();
    let mutate_all = |children: Vec<S>, rng: &mut StdRng| -> Result<Vec<S>> {
        children
            .iter()
            .map(|child| mutation.apply(child, rng).map_err(EaError::from))
            .collect()
    };

    let mut offspring = Vec::with_capacity(n + 1);
    match algorithm.crossover() {
        None => {
            let jobs: Vec<(usize, u64)> = (0..n).map(|i| (i, rng.random())).collect();
            let batches = dispatch(jobs, pool, |(i, seed)| {
                mutate_all(vec![parents[i].clone()], &mut create_rng(seed))
            })?;
            offspring.extend(batches.into_iter().flatten());
        }
        Some(crossover) => {
            // Pairs (p0, p1), (p2, p3), ... wrapping around; further rounds
            // continue from where the last stopped until N children exist.
            let mut cursor = 0usize;
            while offspring.len() < n {
                let pairs = (n - offspring.len()).div_ceil(2);
                let jobs: Vec<(usize, usize, u64)> = (0..pairs)
                    .map(|k| {
                        let a = (cursor + 2 * k) % n;
                        (a, (a + 1) % n, rng.random())
                    })
                    .collect();
                cursor = (cursor + 2 * pairs) % n;

                let batches = dispatch(jobs, pool, |(a, b, seed)| {
                    let mut rng = create_rng(seed);
                    let children = crossover.apply(&parents[a], &parents[b], &mut rng)?;
                    if children.is_empty() {
                        return Err(EaError::EmptyOffspring {
                            operator: crossover.name().to_string(),
                        });
                    }
                    mutate_all(children, &mut rng)
                })?;
                offspring.extend(batches.into_iter().flatten());
            }
        }
    }

    offspring.truncate(n);
    Ok(offspring)
}

/// Runs every job, on `pool` when given. Output order follows job order.
fn dispatch<J, S, F>(jobs: Vec<J>, pool: Option<&ThreadPool>, work: F) -> Result<Vec<Vec<S>>>
where
    J: Send,
    S: Send,
    F: Fn(J) -> Result<Vec<S>> + Sync,
{
    match pool {
        Some(pool) => pool.install(|| jobs.into_par_iter().map(&work).collect()),
        None => jobs.into_iter().map(work).collect(),
    }
}
