//! World generation configuration with documented constants
//!
//! All tunable generation numbers are collected here with explanations
//! of their purpose and how they interact with each other.

use crate::world::Tier;

/// Configuration for world generation and simulation
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Discrete world-size selector
    ///
    /// Controls the region grid side (4/8/16/32) and, through the count
    /// die, how many settlements each density blueprint attempts.
    pub tier: Tier,

    /// Seed for the session RNG
    ///
    /// Every roll in generation and simulation draws from one ChaCha8
    /// stream, so equal seeds reproduce identical worlds and histories.
    pub seed: u64,

    /// Attempt budget for one settlement placement
    ///
    /// Placement rejection-samples random cells until it finds wilds (or
    /// tamed) ground. Exhausting the budget abandons that settlement,
    /// which is the intended source of density variance; the abandoned
    /// count is surfaced in GenStats rather than treated as an error.
    pub placement_retry_budget: u32,
}

impl WorldConfig {
    pub fn new(tier: Tier, seed: u64) -> Self {
        Self {
            tier,
            seed,
            placement_retry_budget: 10,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.placement_retry_budget == 0 {
            return Err("placement_retry_budget must be at least 1".into());
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(Tier::Small, 0)
    }
}
