//! RNG module - randomness behind tile spawns
//!
//! The engine draws exactly two kinds of random values: a uniform index into
//! the list of empty cells, and a biased coin for "is this spawn a 4". Both
//! go through [`SpawnRng`] so callers can plug in:
//!
//! - [`SimpleRng`]: a seeded LCG, fully deterministic (tests, replays, benches)
//! - [`rand::rngs::StdRng`]: OS-seeded play
//! - [`ScriptedRng`]: a fixed script of draws for pinning exact spawns in tests

use rand::rngs::StdRng;
use rand::Rng;

/// Source of randomness for spawns.
pub trait SpawnRng {
    /// Uniform draw in `[0, len)`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform float in [0, 1) with 24 bits of precision
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SpawnRng for SimpleRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

impl SpawnRng for StdRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.random_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays fixed draws, cycling once exhausted.
///
/// Indices are reduced modulo the requested length, so a script written for
/// one grid stays valid as cells fill up.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    indices: Vec<usize>,
    chances: Vec<bool>,
    next_index: usize,
    next_chance: usize,
}

impl ScriptedRng {
    /// Panics if either script is empty.
    pub fn new(indices: Vec<usize>, chances: Vec<bool>) -> Self {
        assert!(!indices.is_empty(), "index script must not be empty");
        assert!(!chances.is_empty(), "chance script must not be empty");
        Self {
            indices,
            chances,
            next_index: 0,
            next_chance: 0,
        }
    }

    /// Always picks the first empty cell and always spawns a "2".
    pub fn first_cell() -> Self {
        Self::new(vec![0], vec![false])
    }
}

impl SpawnRng for ScriptedRng {
    fn next_index(&mut self, len: usize) -> usize {
        let value = self.indices[self.next_index % self.indices.len()];
        self.next_index += 1;
        value % len
    }

    fn chance(&mut self, _probability: f64) -> bool {
        let value = self.chances[self.next_chance % self.chances.len()];
        self.next_chance += 1;
        value
    }
}

impl<R: SpawnRng + ?Sized> SpawnRng for Box<R> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}
