//! Uniform random draws used by the spawn planner and maneuver scheduler.
//!
//! The engine only needs two kinds of draw, so the source is a small trait:
//! production runs use a seeded ChaCha stream, golden tests use scripted
//! fractions so a whole trajectory can be predicted by hand.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed numbers.
pub trait UniformSource {
    /// Draw from `[low, high]`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw an index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

/// Deterministic ChaCha8 stream. Same seed = same simulation.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for SeededSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of fractions in `[0, 1]`, one per draw.
///
/// A fraction `f` maps to `low + f * (high - low)` for `uniform` and to
/// `floor(f * len)` for `index`. Once the script runs out every draw
/// returns the midpoint of its range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    fractions: VecDeque<f64>,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(fractions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            fractions: fractions.into_iter().map(|f| f.clamp(0.0, 1.0)).collect(),
            draws: 0,
        }
    }

    /// A source that always returns the midpoint of the requested range.
    pub fn midpoint() -> Self {
        Self::default()
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    fn next_fraction(&mut self) -> f64 {
        self.draws += 1;
        self.fractions.pop_front().unwrap_or(0.5)
    }
}

impl UniformSource for ScriptedSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let f = self.next_fraction();
        if high <= low {
            return low;
        }
        low + f * (high - low)
    }

    fn index(&mut self, len: usize) -> usize {
        let f = self.next_fraction();
        ((f * len as f64) as usize).min(len.saturating_sub(1))
    }
}
