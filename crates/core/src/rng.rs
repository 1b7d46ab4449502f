//! RNG module - piece generation
//!
//! [`PieceGenerator`] draws uniformly from the seven kinds and rejects a draw
//! equal to the previous one, resampling until it differs. This is a weak
//! fairness policy: it prevents immediate repeats but does not bound droughts
//! the way a 7-bag does.
//!
//! Also provides a simple LCG so a seed reproduces a whole session, and a
//! scripted source for tests and tools that need an exact piece order.

use crate::error::{EngineError, Result};
use crate::types::ShapeKind;

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
    /// Scales by the high bits; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Anything that can supply the next kind to play
pub trait PieceSource {
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniform generator with no immediate repeats
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    last: Option<ShapeKind>,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            last: None,
        }
    }

    /// Draw the next kind, differing from the previous draw
    pub fn next(&mut self) -> ShapeKind {
        let kinds = ShapeKind::ALL;
        let kind = loop {
            let candidate = kinds[self.rng.next_range(kinds.len() as u32) as usize];
            if Some(candidate) != self.last {
                break candidate;
            }
        };
        self.last = Some(kind);
        kind
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for PieceGenerator {
    fn next_kind(&mut self) -> ShapeKind {
        self.next()
    }
}

/// Replays a fixed sequence of kinds, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<ShapeKind>,
    index: usize,
}

impl ScriptedSource {
    /// Fails with [`EngineError::EmptyScript`] when `kinds` is empty
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Result<Self> {
        let kinds = kinds.into();
        if kinds.is_empty() {
            return Err(EngineError::EmptyScript);
        }
        Ok(Self { kinds, index: 0 })
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}
