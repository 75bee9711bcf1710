//! Flat registry of every agent in the session
//!
//! Agents are never removed; death flips `alive` and the simulation
//! skips the body. Ids are therefore plain indices and stay valid for
//! the life of the session.

use crate::agent::{Agent, AgentId, AgentKind};

#[derive(Default)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id and insert the agent built for it.
    pub(crate) fn spawn(&mut self, build: impl FnOnce(AgentId) -> Agent) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        let agent = build(id);
        debug_assert_eq!(agent.id, id);
        self.agents.push(agent);
        id
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn active_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_active()).count()
    }

    pub fn npc_count(&self) -> usize {
        self.agents
            .iter()
            .filter(|a| a.kind == AgentKind::Npc)
            .count()
    }
}
