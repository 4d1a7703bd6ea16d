//! Random relations, mostly for benchmarks and cross-checking the closure
//! algorithms.
//!
//! Every generator draws from a caller-supplied `rng`, so a whole run can be
//! reproduced from one seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Bernoulli, Distribution};
use tracing::trace;

use crate::Relation;

/// The generator used by the benchmarks.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A relation over `size` elements where every pair is related with
/// probability `density`, clamped to `[0, 1]`.
pub fn random_relation<R: Rng>(rng: &mut R, size: usize, density: f64) -> Relation {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut out = Relation::new(size);
    let Ok(dist) = Bernoulli::new(density) else {
        return out;
    };
    for row in 0..size {
        for column in 0..size {
            if dist.sample(rng) {
                out.put(row, column, true);
            }
        }
    }
    trace!(size, density, power = out.power(), "generated relation");
    out
}

/// A relation over `size` elements with `draws` uniformly chosen pairs set.
/// Pairs may be drawn more than once, so the power can be below `draws`.
pub fn scattered_relation<R: Rng>(rng: &mut R, size: usize, draws: usize) -> Relation {
    let mut out = Relation::new(size);
    if size == 0 {
        return out;
    }
    for _ in 0..draws {
        let row = rng.random_range(0..size);
        let column = rng.random_range(0..size);
        out.put(row, column, true);
    }
    trace!(size, draws, power = out.power(), "scattered relation");
    out
}
