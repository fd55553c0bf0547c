//! Protocol messages exchanged between the dealer and agents
//!
//! A message carries an address (one player or everybody), a delivery type
//! (ask expects a reply, notification does not) and an opaque payload. The
//! dealer only ever inspects the payload's kind; the body belongs to whoever
//! built the message.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::PlayerId;

/// Where a message goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Address {
    /// Every registered agent
    Broadcast,
    /// A single player
    Player(PlayerId),
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Broadcast => f.write_str("broadcast"),
            Address::Player(id) => write!(f, "{}", id),
        }
    }
}

/// Delivery type of a message
///
/// Anything other than `ask` or `notification` is kept verbatim so the router
/// can reject it with the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    /// Request expecting exactly one synchronous reply
    Ask,
    /// One-way push
    Notification,
    /// Unrecognized type
    Other(String),
}

impl From<String> for MessageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ask" => MessageType::Ask,
            "notification" => MessageType::Notification,
            _ => MessageType::Other(value),
        }
    }
}

impl From<MessageType> for String {
    fn from(value: MessageType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Ask => f.write_str("ask"),
            MessageType::Notification => f.write_str("notification"),
            MessageType::Other(other) => f.write_str(other),
        }
    }
}

/// Semantic type of a payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    GameStart,
    RoundStart,
    StreetStart,
    Ask,
    GameUpdate,
    RoundResult,
    GameResult,
    Other(String),
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::GameStart => "game_start_message",
            MessageKind::RoundStart => "round_start_message",
            MessageKind::StreetStart => "street_start_message",
            MessageKind::Ask => "ask_message",
            MessageKind::GameUpdate => "game_update_message",
            MessageKind::RoundResult => "round_result_message",
            MessageKind::GameResult => "game_result_message",
            MessageKind::Other(other) => other,
        }
    }
}

impl From<String> for MessageKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "game_start_message" => MessageKind::GameStart,
            "round_start_message" => MessageKind::RoundStart,
            "street_start_message" => MessageKind::StreetStart,
            "ask_message" => MessageKind::Ask,
            "game_update_message" => MessageKind::GameUpdate,
            "round_result_message" => MessageKind::RoundResult,
            "game_result_message" => MessageKind::GameResult,
            _ => MessageKind::Other(value),
        }
    }
}

impl From<MessageKind> for String {
    fn from(value: MessageKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message content handed to agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Semantic type
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    /// Structured content, opaque to the dealer
    #[serde(default)]
    pub body: serde_json::Value,
}

impl Payload {
    pub fn new(kind: MessageKind, body: serde_json::Value) -> Self {
        Self { kind, body }
    }
}

/// A single protocol message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub address: Address,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub payload: Payload,
}

impl Message {
    /// Request addressed to one player
    pub fn ask(player: PlayerId, kind: MessageKind, body: serde_json::Value) -> Self {
        Self {
            address: Address::Player(player),
            message_type: MessageType::Ask,
            payload: Payload::new(kind, body),
        }
    }

    /// One-way notification
    pub fn notification(address: Address, kind: MessageKind, body: serde_json::Value) -> Self {
        Self {
            address,
            message_type: MessageType::Notification,
            payload: Payload::new(kind, body),
        }
    }

    pub fn is_ask(&self) -> bool {
        self.message_type == MessageType::Ask
    }

    /// The notification that closes a round
    pub fn is_round_result(&self) -> bool {
        self.message_type == MessageType::Notification
            && self.payload.kind == MessageKind::RoundResult
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}:{})",
            self.address, self.message_type, self.payload.kind
        )
    }
}

/// Render a batch for diagnostics
pub fn describe_batch(messages: &[Message]) -> String {
    let parts: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
