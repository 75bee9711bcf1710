//! Agents: the player and every NPC in the world

pub mod attributes;
pub mod nation;
pub mod profession;
pub mod registry;

pub use attributes::{Attribute, Attributes};
pub use nation::Nation;
pub use profession::{ArmorKind, Profession, Purse, WeaponKind};
pub use registry::AgentRegistry;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::world::PlaceCoord;

/// Index into the agent registry; stable for the life of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    Player,
    Npc,
}

/// What an NPC is currently doing; only the decision policy writes this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Idle,
    Sleeping,
    Working,
}

/// A single character, player or NPC.
///
/// The home place never changes after creation. The current place does,
/// but only through the movement resolver, which keeps it consistent
/// with the place occupant lists. A dead agent stays registered and is
/// skipped by simulation and movement.
pub struct Agent {
    pub id: AgentId,
    pub kind: AgentKind,
    pub first_name: String,
    pub last_name: String,
    pub home: PlaceCoord,
    pub place: PlaceCoord,
    pub age: i32,
    pub max_age: i32,
    pub birth_day: i32,
    pub birth_month: i32,
    pub attributes: Attributes,
    /// None only for the player, who starts without a trade.
    pub profession: Option<Profession>,
    pub weapon: WeaponKind,
    pub armor: ArmorKind,
    pub purse: Purse,
    /// Food units accrued from work (farmers).
    pub provisions: i32,
    pub mode: Mode,
    pub alive: bool,
    /// Signed opinion of other agents, adjusted by socializing.
    pub relationships: HashMap<AgentId, i32>,
}

impl Agent {
    /// Dead agents are excluded from active simulation and movement.
    pub fn is_active(&self) -> bool {
        self.alive
    }

    pub fn is_at_home(&self) -> bool {
        self.place == self.home
    }

    pub fn relation(&self, other: AgentId) -> Option<i32> {
        self.relationships.get(&other).copied()
    }

    pub(crate) fn adjust_relation(&mut self, other: AgentId, delta: i32) {
        *self.relationships.entry(other).or_insert(0) += delta;
    }
}
