//! Human-readable summaries of the message stream
//!
//! Reads the same batches the dealer publishes and turns them into log
//! lines. A body that lacks an expected field simply produces no line; the
//! summarizer never reports an error and never changes what gets delivered.

use dealer_core::{Message, MessageKind, Payload};
use serde_json::Value;
use std::collections::HashSet;
use tracing::info;

/// Verbosity-gated summarizer
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageSummarizer {
    verbose: u8,
}

impl MessageSummarizer {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    pub fn set_verbose(&mut self, verbose: u8) {
        self.verbose = verbose;
    }

    pub fn is_enabled(&self) -> bool {
        self.verbose > 0
    }

    /// Summarize a batch, log each distinct line once, and return the lines
    pub fn summarize_messages(&self, messages: &[Message]) -> Vec<String> {
        if !self.is_enabled() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let lines: Vec<String> = messages
            .iter()
            .filter_map(|m| self.summarize(&m.payload))
            .filter(|line| seen.insert(line.clone()))
            .collect();

        for line in &lines {
            info!(target: "dealer::summary", "{}", line);
        }
        lines
    }

    /// One line for one payload, if its kind is summarized
    pub fn summarize(&self, payload: &Payload) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        let body = &payload.body;
        match payload.kind {
            MessageKind::GameStart => summarize_game_start(body),
            MessageKind::RoundStart => summarize_round_start(body),
            MessageKind::StreetStart => summarize_street_start(body),
            MessageKind::GameUpdate => summarize_player_action(body),
            MessageKind::RoundResult => summarize_round_result(body),
            MessageKind::GameResult => summarize_game_result(body),
            _ => None,
        }
    }
}

fn summarize_game_start(body: &Value) -> Option<String> {
    let info = body.get("game_information")?;
    let names = seat_names(info.get("seats")?)?;
    let rule = info.get("rule")?;
    Some(format!(
        "Started the game with player {:?} for {} round. (start stack={}, small blind={})",
        names,
        rule.get("max_round")?.as_u64()?,
        rule.get("initial_stack")?.as_u64()?,
        rule.get("small_blind_amount")?.as_u64()?,
    ))
}

fn summarize_round_start(body: &Value) -> Option<String> {
    Some(format!(
        "Started the round {}",
        body.get("round_count")?.as_u64()?
    ))
}

fn summarize_street_start(body: &Value) -> Option<String> {
    let street = body.get("street")?.as_str()?;
    let board = body.get("round_state")?.get("community_card")?;
    Some(format!(
        "Street \"{}\" started. (community card = {})",
        street, board
    ))
}

fn summarize_player_action(body: &Value) -> Option<String> {
    let action = body.get("action")?;
    let uuid = action.get("player_uuid")?.as_str()?;
    let seats = body.get("round_state")?.get("seats")?.as_array()?;
    let name = seats
        .iter()
        .find(|s| s.get("uuid").and_then(Value::as_str) == Some(uuid))?
        .get("name")?
        .as_str()?;
    Some(format!(
        "\"{}\" declared \"{}:{}\"",
        name,
        action.get("action")?.as_str()?,
        action.get("amount")?.as_u64()?
    ))
}

fn summarize_round_result(body: &Value) -> Option<String> {
    let winners = seat_names(body.get("winners")?)?;
    let round_count = body.get("round_count")?.as_u64()?;
    let stacks = seat_stacks(body.get("round_state")?.get("seats")?)?;
    Some(format!(
        "{:?} won the round {} (stack = {})",
        winners, round_count, stacks
    ))
}

fn summarize_game_result(body: &Value) -> Option<String> {
    let seats = body.get("game_information")?.get("seats")?;
    Some(format!("Game finished. (stack = {})", seat_stacks(seats)?))
}

fn seat_names(seats: &Value) -> Option<Vec<&str>> {
    seats
        .as_array()?
        .iter()
        .map(|s| s.get("name").and_then(Value::as_str))
        .collect()
}

fn seat_stacks(seats: &Value) -> Option<String> {
    let entries: Option<Vec<String>> = seats
        .as_array()?
        .iter()
        .map(|s| {
            let name = s.get("name")?.as_str()?;
            let stack = s.get("stack")?.as_u64()?;
            Some(format!("{:?}: {}", name, stack))
        })
        .collect();
    Some(format!("{{{}}}", entries?.join(", ")))
}
