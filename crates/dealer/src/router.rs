//! Message delivery between the dealer and registered agents

use dealer_core::{Address, Decision, DealerError, Message, MessageType, Result};
use tracing::{debug, trace, warn};

use crate::registry::AgentRegistry;

/// Delivers messages to one or all agents
///
/// Notifications are pushed and return nothing. An ask blocks until the
/// addressed agent answers and hands that answer back to the caller.
pub struct MessageRouter {
    registry: AgentRegistry,
}

impl MessageRouter {
    pub fn new(registry: AgentRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AgentRegistry {
        &mut self.registry
    }

    /// Deliver a message; returns the decision when the message was an ask
    pub fn deliver(&mut self, message: &Message) -> Result<Option<Decision>> {
        if let MessageType::Other(other) = &message.message_type {
            return Err(DealerError::UnknownMessageType(other.clone()));
        }

        match &message.address {
            Address::Broadcast => self.broadcast(message),
            Address::Player(id) => {
                let agent = self.registry.resolve(id)?;
                match message.message_type {
                    MessageType::Ask => {
                        debug!("Asking {} ({})", id, message.payload.kind);
                        let decision = agent.respond_to_request(&message.payload);
                        debug!("{} answered {}", id, decision);
                        Ok(Some(decision))
                    }
                    _ => {
                        trace!("Notifying {} ({})", id, message.payload.kind);
                        agent.receive_notification(&message.payload);
                        Ok(None)
                    }
                }
            }
        }
    }

    fn broadcast(&mut self, message: &Message) -> Result<Option<Decision>> {
        if message.is_ask() {
            // An ask must target one player; the first registered agent
            // answers, the rest are not contacted.
            warn!("Broadcast ask ({}), routing to first agent", message.payload.kind);
            return Ok(self
                .registry
                .all()
                .next()
                .map(|(_, agent)| agent.respond_to_request(&message.payload)));
        }

        trace!("Broadcasting {}", message.payload.kind);
        for (_, agent) in self.registry.all() {
            agent.receive_notification(&message.payload);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, RecordingAgent, Transcript};
    use dealer_core::{Action, DEFAULT_SEED, IdentifierPool, MessageKind, PlayerId};
    use serde_json::json;

    fn router(names: &[&str], transcript: &Transcript) -> (MessageRouter, Vec<PlayerId>) {
        let mut registry = AgentRegistry::new(IdentifierPool::new(DEFAULT_SEED));
        let mut ids = Vec::new();
        for name in names {
            let id = registry.issue().unwrap();
            registry
                .register(
                    id.clone(),
                    RecordingAgent::new(name, transcript)
                        .replying(vec![Decision::new(Action::Call, 20)]),
                )
                .unwrap();
            ids.push(id);
        }
        (MessageRouter::new(registry), ids)
    }

    #[test]
    fn test_broadcast_reaches_every_agent_once() {
        let transcript = Transcript::default();
        let (mut router, _) = router(&["a", "b", "c"], &transcript);
        let msg = Message::notification(Address::Broadcast, MessageKind::RoundStart, json!({}));

        assert_eq!(router.deliver(&msg).unwrap(), None);

        let received = transcript.notified();
        assert_eq!(
            received,
            vec![
                ("a".to_string(), MessageKind::RoundStart),
                ("b".to_string(), MessageKind::RoundStart),
                ("c".to_string(), MessageKind::RoundStart),
            ]
        );
    }

    #[test]
    fn test_unicast_notification_reaches_only_target() {
        let transcript = Transcript::default();
        let (mut router, ids) = router(&["a", "b"], &transcript);
        let msg = Message::notification(
            Address::Player(ids[1].clone()),
            MessageKind::GameUpdate,
            json!({}),
        );
        router.deliver(&msg).unwrap();
        assert_eq!(
            transcript.notified(),
            vec![("b".to_string(), MessageKind::GameUpdate)]
        );
    }

    #[test]
    fn test_ask_returns_decision() {
        let transcript = Transcript::default();
        let (mut router, ids) = router(&["a", "b"], &transcript);
        let msg = Message::ask(ids[0].clone(), MessageKind::Ask, json!({"valid_actions": []}));

        let decision = router.deliver(&msg).unwrap();
        assert_eq!(decision, Some(Decision::new(Action::Call, 20)));
        assert_eq!(
            transcript.events(),
            vec![("a".to_string(), Event::Asked(MessageKind::Ask))]
        );
    }

    #[test]
    fn test_unknown_address() {
        let transcript = Transcript::default();
        let (mut router, _) = router(&["a"], &transcript);
        let msg = Message::ask(PlayerId::from("ghost"), MessageKind::Ask, json!({}));
        match router.deliver(&msg) {
            Err(DealerError::UnknownAddress(id)) => assert_eq!(id.as_str(), "ghost"),
            other => panic!("Expected UnknownAddress, got {:?}", other),
        }
        assert!(transcript.events().is_empty());
    }

    #[test]
    fn test_unknown_message_type() {
        let transcript = Transcript::default();
        let (mut router, _) = router(&["a", "b"], &transcript);
        let mut msg = Message::notification(Address::Broadcast, MessageKind::RoundStart, json!({}));
        msg.message_type = MessageType::Other("shout".into());
        match router.deliver(&msg) {
            Err(DealerError::UnknownMessageType(t)) => assert_eq!(t, "shout"),
            other => panic!("Expected UnknownMessageType, got {:?}", other),
        }
        assert!(transcript.events().is_empty());
    }

    #[test]
    fn test_broadcast_ask_answered_by_first_agent() {
        let transcript = Transcript::default();
        let (mut router, _) = router(&["a", "b"], &transcript);
        let mut msg = Message::notification(Address::Broadcast, MessageKind::Ask, json!({}));
        msg.message_type = MessageType::Ask;

        let decision = router.deliver(&msg).unwrap();
        assert_eq!(decision, Some(Decision::new(Action::Call, 20)));
        assert_eq!(
            transcript.events(),
            vec![("a".to_string(), Event::Asked(MessageKind::Ask))]
        );
    }
}
