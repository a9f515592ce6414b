use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed draws
///
/// Every random decision in the transformer is derived from `next_unit`,
/// so replaying a list of unit draws reproduces a generation exactly.
pub trait RandomSource {
    /// Next draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`, computed as `floor(u * len)`
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Uniform choice from a non-empty slice
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.pick_index(items.len())]
    }
}

/// Adapter over any `rand` generator
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator, the default for interactive use
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Seeded generator for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of unit draws, cycling when exhausted
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    position: usize,
}

impl ScriptedRandom {
    /// Create a scripted source; values are clamped into `[0, 1)`
    pub fn new(draws: Vec<f64>) -> Self {
        let draws = if draws.is_empty() { vec![0.0] } else { draws };
        Self {
            draws: draws
                .into_iter()
                .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
            position: 0,
        }
    }

    /// A source that always returns the same draw
    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// Number of draws taken so far
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw
    }
}
