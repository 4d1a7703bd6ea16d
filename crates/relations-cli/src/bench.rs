//! Timing of the closure algorithms over random relations.

use std::time::{Duration, Instant};

use rand::Rng;
use relations::{closure, generators::scattered_relation, Relation};
use tracing::{debug, info};

pub struct BenchConfig {
    /// Relation sizes to time
    pub sizes: Vec<usize>,

    /// Number of random pairs drawn for a relation of size `n`. Each entry
    /// is a fraction `(numerator, denominator)` of `n²`; `(0, 1)` means a
    /// single draw.
    pub densities: Vec<(usize, usize)>,

    /// Relations timed per size and density
    pub repeat: usize,

    /// Seed of the one generator used for the whole run
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: vec![50, 100, 150],
            densities: vec![(0, 1), (1, 2), (1, 4), (2, 3), (1, 1)],
            repeat: 5,
            seed: 0,
        }
    }
}

#[derive(Clone, Copy)]
pub enum Algorithm {
    Warshall,
    MergeDegrees,
    MergePowers,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] =
        [Algorithm::Warshall, Algorithm::MergeDegrees, Algorithm::MergePowers];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Warshall => "warshall",
            Algorithm::MergeDegrees => "merge-degrees",
            Algorithm::MergePowers => "merge-powers",
        }
    }

    pub fn run(self, relation: &Relation) -> Relation {
        match self {
            Algorithm::Warshall => closure::transitive_closure(relation),
            Algorithm::MergeDegrees => closure::merge_degrees(relation),
            Algorithm::MergePowers => closure::merge_powers(relation),
        }
    }
}

pub struct Timing {
    pub algorithm: Algorithm,
    pub size: usize,
    pub draws: usize,
    pub min: Duration,
    pub max: Duration,
}

fn draws(size: usize, (num, den): (usize, usize)) -> usize {
    if num == 0 { 1 } else { size * size * num / den }
}

pub fn run<R: Rng>(config: &BenchConfig, rng: &mut R) -> Vec<Timing> {
    let mut timings = Vec::new();
    for algorithm in Algorithm::ALL {
        for &density in &config.densities {
            for &size in &config.sizes {
                let draws = draws(size, density);
                let mut min = Duration::MAX;
                let mut max = Duration::ZERO;
                for _ in 0..config.repeat {
                    let relation = scattered_relation(rng, size, draws);
                    let start = Instant::now();
                    let closed = algorithm.run(&relation);
                    let elapsed = start.elapsed();
                    debug!(algorithm = algorithm.name(), size, power = closed.power(), ?elapsed);
                    min = min.min(elapsed);
                    max = max.max(elapsed);
                }
                info!(algorithm = algorithm.name(), size, draws, ?min, ?max, "timed");
                timings.push(Timing { algorithm, size, draws, min, max });
            }
        }
    }
    timings
}
