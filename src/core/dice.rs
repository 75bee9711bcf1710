//! Dice rolls for all game randomness
//!
//! Every random decision in generation and simulation is phrased as a
//! dice roll against the session's shared `ChaCha8Rng`, so a fixed seed
//! reproduces an entire world and its simulation history.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A set of identical dice plus a flat modifier, e.g. `2d6+1`.
///
/// The dice themselves are plain data; the generator is supplied at roll
/// time so callers control determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    count: u32,
    faces: i32,
    modifier: i32,
}

pub const D2: Dice = Dice::new(2);
pub const D4: Dice = Dice::new(4);
pub const D6: Dice = Dice::new(6);
pub const D8: Dice = Dice::new(8);
pub const D10: Dice = Dice::new(10);
pub const D12: Dice = Dice::new(12);
pub const D20: Dice = Dice::new(20);

impl Dice {
    /// Single die with the given number of faces.
    pub const fn new(faces: i32) -> Self {
        Self::set(1, faces, 0)
    }

    /// `count` dice of `faces` sides, `modifier` added to the summed roll.
    pub const fn set(count: u32, faces: i32, modifier: i32) -> Self {
        Self {
            count,
            faces,
            modifier,
        }
    }

    /// A die one face wider than this one, keeping count and modifier.
    pub const fn widened(self) -> Self {
        Self::set(self.count, self.faces + 1, self.modifier)
    }

    /// Sum of `count` uniform draws over `[1, faces]` plus the modifier.
    pub fn roll(&self, rng: &mut ChaCha8Rng) -> i32 {
        let mut total = self.modifier;
        for _ in 0..self.count {
            total += rng.gen_range(1..=self.faces);
        }
        total
    }

    pub const fn faces(&self) -> i32 {
        self.faces
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count > 1 {
            write!(f, "{}", self.count)?;
        }
        write!(f, "d{}", self.faces)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        }
        Ok(())
    }
}
