use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Seedable random source for the particle clouds.
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: Pcg64,
}

impl Jitter {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64::from_entropy(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform value between `min` and `max`, in either order.
    pub fn rand(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.rng.gen::<f64>()
    }

    /// Like `rand`, but each bound is first scaled by its own random factor
    /// in `min_scale..max_scale`, so the spread itself wobbles.
    pub fn rough_rand(&mut self, min: f64, max: f64, min_scale: f64, max_scale: f64) -> f64 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let lo = min * self.rand(min_scale, max_scale);
        let hi = max * self.rand(min_scale, max_scale);
        self.rand(lo, hi)
    }
}
