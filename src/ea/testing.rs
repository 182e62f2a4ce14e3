//! Shared fixtures for unit tests.

use super::types::{Instance, Solution};
use super::variation::{Crossover, Mutation};
use rand::{Rng, RngCore};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A bare solution: an identifier plus a fixed objective.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scored {
    pub id: usize,
    pub objective: f64,
}

impl Solution for Scored {
    fn objective(&self) -> f64 {
        self.objective
    }
}

/// Builds solutions whose `id` is their index in `values`.
pub fn scored(values: &[f64]) -> Vec<Scored> {
    values
        .iter()
        .enumerate()
        .map(|(id, &objective)| Scored { id, objective })
        .collect()
}

pub fn objectives<S: Solution>(population: &[S]) -> Vec<f64> {
    population.iter().map(Solution::objective).collect()
}

/// Hands out a fixed list of objectives in order, cycling when exhausted.
pub struct FixedInstance {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl FixedInstance {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: AtomicUsize::new(0),
        }
    }
}

impl Instance for FixedInstance {
    type Solution = Scored;

    fn random_solution(&self, _rng: &mut dyn RngCore) -> anyhow::Result<Scored> {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(Scored {
            id,
            objective: self.values[id % self.values.len()],
        })
    }
}

/// An instance whose random generator always fails.
pub struct BrokenInstance;

impl Instance for BrokenInstance {
    type Solution = Scored;

    fn random_solution(&self, _rng: &mut dyn RngCore) -> anyhow::Result<Scored> {
        anyhow::bail!("instance file is corrupt")
    }
}

// ---- OneMax: maximize the number of set bits ----

#[derive(Clone, Debug, PartialEq)]
pub struct Bits {
    pub bits: Vec<bool>,
    pub ones: f64,
}

impl Bits {
    pub fn new(bits: Vec<bool>) -> Self {
        let ones = bits.iter().filter(|&&b| b).count() as f64;
        Self { bits, ones }
    }
}

impl Solution for Bits {
    fn objective(&self) -> f64 {
        self.ones
    }
}

pub struct OneMax {
    pub len: usize,
}

impl Instance for OneMax {
    type Solution = Bits;

    fn random_solution(&self, rng: &mut dyn RngCore) -> anyhow::Result<Bits> {
        Ok(Bits::new((0..self.len).map(|_| rng.random_bool(0.5)).collect()))
    }
}

/// Single-point crossover producing two children.
pub struct OnePoint;

impl Crossover<Bits> for OnePoint {
    fn name(&self) -> &str {
        "one-point"
    }

    fn apply(&self, a: &Bits, b: &Bits, rng: &mut dyn RngCore) -> anyhow::Result<Vec<Bits>> {
        let point = rng.random_range(0..=a.bits.len());
        let mut c1 = a.bits[..point].to_vec();
        c1.extend_from_slice(&b.bits[point..]);
        let mut c2 = b.bits[..point].to_vec();
        c2.extend_from_slice(&a.bits[point..]);
        Ok(vec![Bits::new(c1), Bits::new(c2)])
    }
}

/// Uniform crossover producing a single child.
pub struct UniformOne;

impl Crossover<Bits> for UniformOne {
    fn name(&self) -> &str {
        "uniform-one"
    }

    fn apply(&self, a: &Bits, b: &Bits, rng: &mut dyn RngCore) -> anyhow::Result<Vec<Bits>> {
        let bits = a
            .bits
            .iter()
            .zip(&b.bits)
            .map(|(&x, &y)| if rng.random_bool(0.5) { x } else { y })
            .collect();
        Ok(vec![Bits::new(bits)])
    }
}

/// Flips one random bit.
pub struct FlipOne;

impl Mutation<Bits> for FlipOne {
    fn name(&self) -> &str {
        "flip-one"
    }

    fn apply(&self, individual: &Bits, rng: &mut dyn RngCore) -> anyhow::Result<Bits> {
        let mut bits = individual.bits.clone();
        let i = rng.random_range(0..bits.len());
        bits[i] = !bits[i];
        Ok(Bits::new(bits))
    }
}

/// Crossover that never yields a child.
pub struct Barren;

impl<S: Solution> Crossover<S> for Barren {
    fn name(&self) -> &str {
        "barren"
    }

    fn apply(&self, _a: &S, _b: &S, _rng: &mut dyn RngCore) -> anyhow::Result<Vec<S>> {
        Ok(Vec::new())
    }
}

/// Mutation whose evaluation always fails.
pub struct Failing;

impl<S: Solution> Mutation<S> for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn apply(&self, _individual: &S, _rng: &mut dyn RngCore) -> anyhow::Result<S> {
        anyhow::bail!("objective evaluation overflowed")
    }
}
