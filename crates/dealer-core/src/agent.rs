//! The capability every pluggable player implements

use crate::action::Decision;
use crate::ids::PlayerId;
use crate::message::Payload;

/// A decision-maker bound to one seat
///
/// The dealer calls into an agent synchronously: `respond_to_request` blocks
/// the game until it returns, so implementations are expected to answer
/// promptly. There is no timeout at this layer.
pub trait Agent {
    /// Answer an ask addressed to this agent
    fn respond_to_request(&mut self, payload: &Payload) -> Decision;

    /// Observe a notification
    fn receive_notification(&mut self, payload: &Payload);

    /// Told once, at registration, which identifier the agent plays as
    fn set_identifier(&mut self, _id: &PlayerId) {}
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn respond_to_request(&mut self, payload: &Payload) -> Decision {
        (**self).respond_to_request(payload)
    }

    fn receive_notification(&mut self, payload: &Payload) {
        (**self).receive_notification(payload)
    }

    fn set_identifier(&mut self, id: &PlayerId) {
        (**self).set_identifier(id)
    }
}
