//! Leaf nodes of the hierarchy: the rooms, fields and workings agents
//! actually stand in.

use serde::{Deserialize, Serialize};

use crate::agent::AgentId;
use crate::world::coords::PlaceCoord;

/// Functional category of a place, drives NPC profession assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceKind {
    Lodging,
    Trader,
    Blacksmith,
    Farm,
    Fishery,
    Reserve,
    Woodland,
    Mine,
    Cave,
    Indoors,
    Outdoors,
    /// Unique per castle; seat of the nation's ruler.
    ThroneRoom,
    /// Unique per settlement area.
    Graveyard,
}

impl PlaceKind {
    /// Work places that seed exactly one resident NPC each.
    pub fn spawns_worker(&self) -> bool {
        matches!(
            self,
            PlaceKind::Lodging
                | PlaceKind::Trader
                | PlaceKind::Blacksmith
                | PlaceKind::Farm
                | PlaceKind::Fishery
                | PlaceKind::Reserve
                | PlaceKind::Woodland
                | PlaceKind::Mine
        )
    }
}

/// A place has a kind and indexes the agents currently standing in it.
///
/// The occupant list is a non-owning back-reference; the registry owns
/// agent lifetimes and keeps the two sides consistent on every move.
pub struct Place {
    name: String,
    coord: PlaceCoord,
    kind: PlaceKind,
    occupants: Vec<AgentId>,
}

impl Place {
    pub(crate) fn new(name: String, coord: PlaceCoord, kind: PlaceKind) -> Self {
        Self {
            name,
            coord,
            kind,
            occupants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coord(&self) -> PlaceCoord {
        self.coord
    }

    pub fn kind(&self) -> PlaceKind {
        self.kind
    }

    /// Promote this place to a unique room (throne room, graveyard).
    pub(crate) fn set_kind(&mut self, kind: PlaceKind) {
        self.kind = kind;
    }

    pub fn occupants(&self) -> &[AgentId] {
        &self.occupants
    }

    pub(crate) fn add_occupant(&mut self, id: AgentId) {
        self.occupants.push(id);
    }

    pub(crate) fn remove_occupant(&mut self, id: AgentId) {
        self.occupants.retain(|&o| o != id);
    }
}
