//! Built-in agents
//!
//! Simple players for replays and smoke tests. Real agents live outside this
//! crate and implement [`Agent`] themselves.

use dealer_core::{Action, Agent, Chips, Decision, Payload};
use serde::Deserialize;
use tracing::trace;

/// Always folds
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldAgent;

impl Agent for FoldAgent {
    fn respond_to_request(&mut self, _payload: &Payload) -> Decision {
        Decision::fold()
    }

    fn receive_notification(&mut self, _payload: &Payload) {}
}

/// One entry of an ask's `valid_actions` list
#[derive(Debug, Deserialize)]
struct ValidAction {
    action: Action,
    #[serde(default)]
    amount: serde_json::Value,
}

/// Calls whatever the ask offers; folds when no call is on offer
#[derive(Debug, Clone, Copy, Default)]
pub struct CallAgent;

impl CallAgent {
    fn call_amount(payload: &Payload) -> Option<Chips> {
        let actions = payload.body.get("valid_actions")?;
        let actions: Vec<ValidAction> = serde_json::from_value(actions.clone()).ok()?;
        actions
            .into_iter()
            .find(|a| a.action == Action::Call)
            .and_then(|a| a.amount.as_u64())
    }
}

impl Agent for CallAgent {
    fn respond_to_request(&mut self, payload: &Payload) -> Decision {
        match Self::call_amount(payload) {
            Some(amount) => Decision::new(Action::Call, amount),
            None => {
                trace!("No call on offer, folding");
                Decision::fold()
            }
        }
    }

    fn receive_notification(&mut self, _payload: &Payload) {}
}

/// Answers every ask with the same decision
#[derive(Debug, Clone, Copy)]
pub struct FixedAgent(pub Decision);

impl Agent for FixedAgent {
    fn respond_to_request(&mut self, _payload: &Payload) -> Decision {
        self.0
    }

    fn receive_notification(&mut self, _payload: &Payload) {}
}

/// Look up a built-in agent by name: `fold` or `call`
pub fn builtin(name: &str) -> Option<Box<dyn Agent>> {
    match name {
        "fold" => Some(Box::new(FoldAgent)),
        "call" => Some(Box::new(CallAgent)),
        _ => None,
    }
}
