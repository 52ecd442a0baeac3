use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices (allows deterministic draws in tests)
pub trait RandomSource {
    /// Return an index in `0..bound`. Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Thread-local OS-seeded generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Reproducible generator for a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of values, each reduced modulo the requested bound.
///
/// Cycles when exhausted; an empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self { values: values.into(), position: 0 }
    }

    /// Always pick the first available color
    pub fn first() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % bound
    }
}
