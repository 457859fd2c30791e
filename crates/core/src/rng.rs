//! RNG module - deterministic piece selection
//!
//! Pieces are drawn uniformly and independently from the catalog: no bag,
//! repeats allowed. A simple LCG keeps every game reproducible from its seed.

use crate::pieces::{pick_random, Shape};
use crate::types::PieceKind;

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
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of new pieces for the engine
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece: a fresh copy of its template plus its kind.
    pub fn draw(&mut self) -> (Shape, PieceKind) {
        pick_random(&mut self.rng)
    }

    /// RNG state, for continuing the sequence in a new game
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
