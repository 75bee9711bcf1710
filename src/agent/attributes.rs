//! Six primary attributes, rolled 3d6 at creation
//!
//! Only charisma feeds the core simulation (relationship rolls); the
//! rest are carried for the combat and skill collaborators.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::dice::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Wisdom,
    Intelligence,
    Charisma,
}

const ATTRIBUTE_DICE: Dice = Dice::set(3, 6, 0);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attributes {
    scores: [i32; 6],
}

impl Attributes {
    pub fn roll(rng: &mut ChaCha8Rng) -> Self {
        let mut scores = [0; 6];
        for score in &mut scores {
            *score = ATTRIBUTE_DICE.roll(rng);
        }
        Self { scores }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        self.scores[attribute as usize]
    }

    /// Standard `(score - 10) / 2` modifier.
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        (self.get(attribute) - 10) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_scores_in_3d6_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let attrs = Attributes::roll(&mut rng);
            for attribute in [
                Attribute::Strength,
                Attribute::Dexterity,
                Attribute::Constitution,
                Attribute::Wisdom,
                Attribute::Intelligence,
                Attribute::Charisma,
            ] {
                let score = attrs.get(attribute);
                assert!((3..=18).contains(&score), "score out of range: {}", score);
            }
        }
    }

    #[test]
    fn test_modifier_midpoint() {
        let attrs = Attributes { scores: [10; 6] };
        assert_eq!(attrs.modifier(Attribute::Charisma), 0);
        let attrs = Attributes { scores: [18; 6] };
        assert_eq!(attrs.modifier(Attribute::Charisma), 4);
        let attrs = Attributes { scores: [3; 6] };
        assert_eq!(attrs.modifier(Attribute::Strength), -3);
    }
}
