//! Seeded random number generation.
//!
//! All stochastic code in the crate takes `&mut dyn RngCore` so that
//! operators stay object safe. Concrete generators come from here.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the OS entropy source.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}
