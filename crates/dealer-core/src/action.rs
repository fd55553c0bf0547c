//! Player actions and the decisions agents return

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::Chips;

/// An action a player can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => f.write_str("fold"),
            Action::Call => f.write_str("call"),
            Action::Raise => f.write_str("raise"),
        }
    }
}

/// Reply to an ask: what to do, and for how much
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub amount: Chips,
}

impl Decision {
    pub fn new(action: Action, amount: Chips) -> Self {
        Self { action, amount }
    }

    pub fn fold() -> Self {
        Self::new(Action::Fold, 0)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_wire_format() {
        let json = r#"{"action": "raise", "amount": 40}"#;
        let decision: Decision = serde_json::from_str(json).unwrap();
        assert_eq!(decision, Decision::new(Action::Raise, 40));
        assert_eq!(decision.to_string(), "raise:40");
    }
}
