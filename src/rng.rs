use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// The single source of every stochastic decision in the show.
///
/// One seeded stream feeds spawn rolls, launch parameters, pattern picks
/// and render-time jitter, so a fixed seed replays an entire run. Components
/// take `&mut RandomSource` instead of reaching for a global generator,
/// which lets tests drive the simulation with a known sequence.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Deterministic source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Non-deterministic source for live shows.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Uniform draw in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.gen_range(lo..hi)
    }

    /// Gaussian draw with the given mean and standard deviation.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        mean + std_dev * z
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        let roll: f64 = self.rng.gen();
        roll < p
    }

    /// Uniform index into a collection of `len` elements.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Weights must be non-negative with a positive sum;
    /// `ShowConfig::validate` enforces this for the pattern distribution.
    pub fn weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut roll = self.rng.gen::<f64>() * total;
        for (i, weight) in weights.iter().enumerate() {
            roll -= weight;
            if roll < 0.0 {
                return i;
            }
        }
        weights.len() - 1
    }
}
