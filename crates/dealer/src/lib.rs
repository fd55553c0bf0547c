//! # dealer
//!
//! Orchestration core for turn-based multi-agent card games.
//!
//! This crate provides:
//! - `AgentRegistry` binding issued identifiers to pluggable agents
//! - `MessageRouter` delivering asks and notifications
//! - `RoundEngine` trait for plugging in a betting state machine
//! - `Dealer` running a game round by round, with between-round bookkeeping
//! - `MessageSummarizer` for human-readable game logs
//! - `ScriptedEngine` for replaying recorded games

pub mod agents;
pub mod bookkeeping;
pub mod builder;
pub mod engine;
pub mod game;
pub mod registry;
pub mod round;
pub mod router;
pub mod script;
pub mod summary;

#[cfg(test)]
mod testing;

pub use agents::{CallAgent, FixedAgent, FoldAgent};
pub use engine::{Phase, RoundEngine, RoundState, Step};
pub use game::{Dealer, GameResult};
pub use registry::AgentRegistry;
pub use round::play_round;
pub use router::MessageRouter;
pub use script::{Script, ScriptedEngine};
pub use summary::MessageSummarizer;
