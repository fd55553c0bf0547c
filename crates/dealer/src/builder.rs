//! Bodies of the messages the dealer itself sends

use dealer_core::{Address, GameConfig, Message, MessageKind, Result, Table};
use serde_json::{Value, json};

/// Game-start broadcast: rules and initial seating
pub fn game_start_message(config: &GameConfig, table: &Table) -> Result<Message> {
    Ok(Message::notification(
        Address::Broadcast,
        MessageKind::GameStart,
        game_information(config, table)?,
    ))
}

/// Game-result broadcast: rules and final standings
pub fn game_result_message(config: &GameConfig, table: &Table) -> Result<Message> {
    Ok(Message::notification(
        Address::Broadcast,
        MessageKind::GameResult,
        game_information(config, table)?,
    ))
}

fn game_information(config: &GameConfig, table: &Table) -> Result<Value> {
    let rule = serde_json::to_value(config)?;
    let seats = serde_json::to_value(table.seats())?;
    Ok(json!({
        "game_information": {
            "player_num": table.len(),
            "rule": rule,
            "seats": seats,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealer_core::{PlayerId, Seat};

    #[test]
    fn test_game_information_shape() {
        let mut table = Table::new();
        table.sit_down(Seat::new(PlayerId::from("u1"), "alice", 100));
        table.sit_down(Seat::new(PlayerId::from("u2"), "bob", 100));
        let config = GameConfig::new(10, 100, 5);

        let msg = game_start_message(&config, &table).unwrap();
        assert_eq!(msg.address, Address::Broadcast);
        assert_eq!(msg.payload.kind, MessageKind::GameStart);

        let info = &msg.payload.body["game_information"];
        assert_eq!(info["player_num"], 2);
        assert_eq!(info["rule"]["small_blind_amount"], 10);
        assert_eq!(info["rule"]["initial_stack"], 100);
        assert_eq!(info["rule"]["max_round"], 5);
        assert_eq!(info["seats"][1]["name"], "bob");
        assert_eq!(info["seats"][1]["uuid"], "u2");
        assert_eq!(info["seats"][1]["state"], "active");

        let result = game_result_message(&config, &table).unwrap();
        assert_eq!(result.payload.kind, MessageKind::GameResult);
        assert!(!result.is_ask());
    }
}
