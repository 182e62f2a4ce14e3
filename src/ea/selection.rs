//! Selection methods for the parent and survivor roles.
//!
//! Both roles share one contract: [`SelectionMethod::select`] maps a
//! population of `n` solutions to a new sequence of exactly `n` solutions
//! (duplicates allowed), leaving the input untouched.
//!
//! # Built-in methods
//!
//! - [`NoSelection`]: identity, the default for an unconfigured role
//! - [`WindowedFps`]: fitness-proportional selection on min-shifted objectives
//! - [`Tournament`]: best of `k` uniformly drawn contenders
//!
//! # References
//!
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §5.2
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Solution;
use rand::{Rng, RngCore};

/// A selection strategy usable as parent or survivor selection.
pub trait SelectionMethod<S: Solution>: Send + Sync {
    /// Short identifier, used in the algorithm label.
    fn name(&self) -> &str;

    /// Returns a sequence with the same length as `population`.
    ///
    /// Must be total: an empty input yields an empty output.
    ///
    /// In the survivor role the input is the current generation followed
    /// by its offspring, and the engine keeps the last `N` entries of the
    /// output. Methods that rank or truncate must place the individuals
    /// to keep at the end.
    fn select(&self, population: &[S], rng: &mut dyn RngCore) -> Vec<S>;
}

/// Identity selection: returns the population unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl<S: Solution> SelectionMethod<S> for NoSelection {
    fn name(&self) -> &str {
        "none"
    }

    fn select(&self, population: &[S], _rng: &mut dyn RngCore) -> Vec<S> {
        population.to_vec()
    }
}

/// Windowed fitness-proportional selection.
///
/// Every objective is shifted by the population minimum, so the weight of
/// individual `i` is `objective[i] - min` and its selection probability is
/// `weight[i] / total`. The worst individual always has weight zero and
/// is never drawn. Raw objectives may be negative.
///
/// When `total` is zero (all objectives equal) or not finite (NaN or
/// infinite objectives), proportional probabilities are undefined and the
/// method falls back to **uniform selection with replacement**.
///
/// # Complexity
/// O(n) to build the wheel, O(log n) per draw
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedFps;

impl WindowedFps {
    /// Normalized cumulative weights, or `None` for a degenerate population.
    ///
    /// The last entry is exactly `1.0`.
    pub fn cumulative_weights<S: Solution>(population: &[S]) -> Option<Vec<f64>> {
        let min = population
            .iter()
            .map(Solution::objective)
            .fold(f64::INFINITY, f64::min);
        if !min.is_finite() {
            return None;
        }

        let weights: Vec<f64> = population.iter().map(|s| s.objective() - min).collect();
        let total: f64 = weights.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            return None;
        }

        let mut running = 0.0;
        let mut cumulative: Vec<f64> = weights
            .iter()
            .map(|w| {
                running += w;
                running / total
            })
            .collect();

        // Pin the tail to 1.0 from the last positive weight onward so a
        // rounding shortfall can never leave a draw unmatched.
        let last_positive = weights.iter().rposition(|&w| w > 0.0)?;
        for c in &mut cumulative[last_positive..] {
            *c = 1.0;
        }
        Some(cumulative)
    }

    /// Index of the first entry strictly greater than `r`, for `r` in `[0, 1)`.
    ///
    /// Zero-weight entries repeat the previous cumulative value and are
    /// therefore never the first to exceed `r`.
    fn spin(cumulative: &[f64], r: f64) -> usize {
        cumulative
            .partition_point(|&c| c <= r)
            .min(cumulative.len() - 1)
    }
}

impl<S: Solution> SelectionMethod<S> for WindowedFps {
    fn name(&self) -> &str {
        "windowed-fps"
    }

    fn select(&self, population: &[S], rng: &mut dyn RngCore) -> Vec<S> {
        let n = population.len();
        if n == 0 {
            return Vec::new();
        }

        match Self::cumulative_weights(population) {
            Some(cumulative) => (0..n)
                .map(|_| {
                    let r: f64 = rng.random();
                    population[Self::spin(&cumulative, r)].clone()
                })
                .collect(),
            None => {
                tracing::trace!(size = n, "degenerate windowed FPS, selecting uniformly");
                (0..n)
                    .map(|_| population[rng.random_range(0..n)].clone())
                    .collect()
            }
        }
    }
}

/// Tournament selection: each slot is filled by the best of `k` random
/// contenders (drawn with replacement).
///
/// Higher `k` means stronger selection pressure; `k = 1` is uniform random
/// selection.
///
/// # Complexity
/// O(k) per slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
    name: String,
}

impl Tournament {
    /// Creates a tournament of `size` contenders (at least 1).
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            name: format!("tournament-{size}"),
        }
    }

    /// Number of contenders per tournament.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Tournament::new(3)
    }
}

impl<S: Solution> SelectionMethod<S> for Tournament {
    fn name(&self) -> &str {
        &self.name
    }

    fn select(&self, population: &[S], rng: &mut dyn RngCore) -> Vec<S> {
        let n = population.len();
        if n == 0 {
            return Vec::new();
        }

        (0..n)
            .map(|_| {
                let mut best = rng.random_range(0..n);
                for _ in 1..self.size {
                    let idx = rng.random_range(0..n);
                    if population[idx].objective() > population[best].objective() {
                        best = idx;
                    }
                }
                population[best].clone()
            })
            .collect()
    }
}
