//! Seeded 7-bag piece generation.
//!
//! The self-play driver and search tests need a realistic piece stream in
//! place of the screen recognizer. Each bag holds one of each of the seven
//! kinds, shuffled; draws exhaust the bag before a new one is shuffled, so
//! every kind appears once per seven draws. Deterministic for a given seed.

use blockpilot_types::{PieceKind, ALL_KINDS};

/// Simple LCG (Linear Congruential Generator) using Numerical Recipes
/// constants. Not statistically strong, but deterministic and dependency
/// free, which is all the driver needs.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed (0 is remapped to avoid the
    /// all-zero fixed point).
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Endless 7-bag piece stream.
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a new bag stream with the given seed.
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: ALL_KINDS,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = ALL_KINDS;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece, shuffling a fresh bag when the current one runs
    /// out.
    pub fn next(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}
