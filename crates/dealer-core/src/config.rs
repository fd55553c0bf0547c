//! Game configuration

use serde::{Deserialize, Serialize};

use crate::error::{DealerError, Result};
use crate::table::Chips;

/// Rules fixed for the whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Small blind; the big blind is always twice this
    pub small_blind_amount: Chips,
    /// Stack every player sits down with
    pub initial_stack: Chips,
    /// Upper bound on rounds played
    pub max_round: u32,
}

impl GameConfig {
    pub fn new(small_blind_amount: Chips, initial_stack: Chips, max_round: u32) -> Self {
        Self {
            small_blind_amount,
            initial_stack,
            max_round,
        }
    }

    /// Twice the small blind; saturates instead of overflowing
    pub fn big_blind_amount(&self) -> Chips {
        self.small_blind_amount.saturating_mul(2)
    }

    /// Reject values a game cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.small_blind_amount == 0 {
            return Err(DealerError::InvalidConfig(
                "small_blind_amount must be positive".into(),
            ));
        }
        if self.small_blind_amount > Chips::MAX / 2 {
            return Err(DealerError::InvalidConfig(format!(
                "small_blind_amount {} leaves no room for a big blind",
                self.small_blind_amount
            )));
        }
        if self.initial_stack == 0 {
            return Err(DealerError::InvalidConfig(
                "initial_stack must be positive".into(),
            ));
        }
        if self.max_round == 0 {
            return Err(DealerError::InvalidConfig(
                "max_round must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(GameConfig::new(10, 100, 1).validate().is_ok());
        assert!(matches!(
            GameConfig::new(0, 100, 1).validate(),
            Err(DealerError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(10, 0, 1).validate(),
            Err(DealerError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(10, 100, 0).validate(),
            Err(DealerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_blind_must_leave_room_for_big_blind() {
        let largest = GameConfig::new(Chips::MAX / 2, Chips::MAX, 1);
        assert!(largest.validate().is_ok());
        assert_eq!(largest.big_blind_amount(), Chips::MAX - 1);

        let too_big = GameConfig::new(Chips::MAX / 2 + 1, Chips::MAX, 1);
        assert!(matches!(too_big.validate(), Err(DealerError::InvalidConfig(_))));
        assert_eq!(too_big.big_blind_amount(), Chips::MAX);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{"small_blind_amount": 5, "initial_stack": 200, "max_round": 10}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.big_blind_amount(), 10);
        assert_eq!(config.max_round, 10);
    }
}
