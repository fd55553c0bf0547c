//! # dealer-core
//!
//! Core types and traits for the table-dealer protocol.
//!
//! This crate provides the foundational types shared by the dealer and by
//! agent implementations:
//! - Player identifiers and the pool that issues them
//! - Protocol messages, addresses and payloads
//! - Actions, decisions and the `Agent` trait
//! - Table seating and game configuration

pub mod action;
pub mod agent;
pub mod config;
pub mod error;
pub mod ids;
pub mod message;
pub mod table;

pub use action::{Action, Decision};
pub use agent::Agent;
pub use config::GameConfig;
pub use error::{DealerError, Result};
pub use ids::{DEFAULT_SEED, IdentifierPool, MAX_PLAYERS, PlayerId};
pub use message::{Address, Message, MessageKind, MessageType, Payload, describe_batch};
pub use table::{Chips, Seat, SeatStatus, Table};
