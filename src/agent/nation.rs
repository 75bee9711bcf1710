//! Nations: one per castle, ruled from its throne room

use crate::agent::AgentId;
use crate::world::AreaCoord;

/// A nation is founded on a castle area. The ruler sits in the unique
/// throne room; every other castle room holds a sworn retainer.
pub struct Nation {
    pub name: String,
    pub ruler: AgentId,
    pub castle: AreaCoord,
    pub citizens: Vec<AgentId>,
}

impl Nation {
    pub fn new(name: String, ruler: AgentId, castle: AreaCoord) -> Self {
        Self {
            name,
            ruler,
            castle,
            citizens: Vec::new(),
        }
    }

    pub fn add_citizen(&mut self, id: AgentId) {
        self.citizens.push(id);
    }
}
