//! Agent registry: which agent answers for which player

use dealer_core::{Agent, DealerError, IdentifierPool, PlayerId, Result};
use std::collections::HashMap;
use tracing::debug;

/// Registry of bound agents, kept in registration order
pub struct AgentRegistry {
    pool: IdentifierPool,
    agents: Vec<(PlayerId, Box<dyn Agent>)>,
    index: HashMap<PlayerId, usize>,
}

impl AgentRegistry {
    /// Create a registry whose identifiers come from `pool`
    pub fn new(pool: IdentifierPool) -> Self {
        Self {
            pool,
            agents: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Draw a fresh identifier from the pool
    pub fn issue(&mut self) -> Result<PlayerId> {
        self.pool.fetch()
    }

    /// Bind an agent to an identifier issued by this registry
    pub fn register<A>(&mut self, id: PlayerId, agent: A) -> Result<()>
    where
        A: Agent + 'static,
    {
        if !self.pool.was_issued(&id) {
            return Err(DealerError::UnknownIdentifier(id));
        }
        if self.index.contains_key(&id) {
            return Err(DealerError::AlreadyRegistered(id));
        }

        let mut agent: Box<dyn Agent> = Box::new(agent);
        agent.set_identifier(&id);
        debug!("Registered agent {} at slot {}", id, self.agents.len());
        self.index.insert(id.clone(), self.agents.len());
        self.agents.push((id, agent));
        Ok(())
    }

    /// Look up the agent bound to `id`
    pub fn resolve(&mut self, id: &PlayerId) -> Result<&mut dyn Agent> {
        let slot = *self
            .index
            .get(id)
            .ok_or_else(|| DealerError::UnknownAddress(id.clone()))?;
        Ok(self.agents[slot].1.as_mut())
    }

    /// All bound agents, in registration order
    pub fn all(&mut self) -> impl Iterator<Item = (&PlayerId, &mut dyn Agent)> + '_ {
        self.agents
            .iter_mut()
            .map(|(id, agent)| (&*id, agent.as_mut() as &mut dyn Agent))
    }

    /// Number of registered agents
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    /// Total identifiers this registry can ever issue
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Available slots
    pub fn available_slots(&self) -> usize {
        self.pool.remaining()
    }
}
