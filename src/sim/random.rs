//! Random source for terrain generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform real numbers over a closed interval
pub trait RandomSource {
    /// A value in `[min, max]`. Returns `min` when the interval is empty or a point.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

/// Seeded PCG source used by the game
#[derive(Debug, Clone)]
pub struct PcgSource {
    seed: u64,
    rng: Pcg32,
}

impl PcgSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgSource {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}
