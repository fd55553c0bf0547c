//! Scripted round engine
//!
//! Replays a recorded game: each round is a list of steps, each step the
//! batch of messages the engine emits after the previous decision. Messages
//! address seats by index; the seat's identifier is filled in when the step
//! is emitted, and any string `"@seat:N"` inside a body is replaced by the
//! identifier of seat `N`.

use dealer_core::{
    Address, Chips, DealerError, Decision, GameConfig, Message, MessageKind, MessageType, Payload,
    Result, Table,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::engine::{Phase, RoundEngine, RoundState, Step};

const SEAT_PLACEHOLDER: &str = "@seat:";

/// A recorded game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    /// Rules to play under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GameConfig>,
    /// Players in seating order
    #[serde(default)]
    pub players: Vec<ScriptedPlayer>,
    /// Rounds in play order; round N is `rounds[N - 1]`
    pub rounds: Vec<ScriptedRound>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// A seated player and the built-in agent that plays it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedPlayer {
    pub name: String,
    #[serde(default = "default_agent")]
    pub agent: String,
}

fn default_agent() -> String {
    "call".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedRound {
    pub steps: Vec<ScriptedStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedStep {
    /// Round is over after this batch
    #[serde(default)]
    pub finished: bool,
    pub messages: Vec<ScriptedMessage>,
    /// Stacks by seat, applied before the batch is emitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacks: Option<Vec<Chips>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedMessage {
    /// Seat index; absent means broadcast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<usize>,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub kind: MessageKind,
    #[serde(default)]
    pub body: Value,
}

impl ScriptedMessage {
    fn resolve(&self, table: &Table) -> Result<Message> {
        let address = match self.to {
            None => Address::Broadcast,
            Some(pos) => Address::Player(table.seat(pos)?.uuid.clone()),
        };
        Ok(Message {
            address,
            message_type: self.message_type.clone(),
            payload: Payload::new(self.kind.clone(), fill_seats(&self.body, table)?),
        })
    }
}

fn fill_seats(value: &Value, table: &Table) -> Result<Value> {
    Ok(match value {
        Value::String(s) => match s.strip_prefix(SEAT_PLACEHOLDER) {
            Some(pos) => {
                let pos: usize = pos
                    .parse()
                    .map_err(|_| DealerError::Engine(format!("bad seat placeholder: {}", s)))?;
                Value::String(table.seat(pos)?.uuid.to_string())
            }
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|v| fill_seats(v, table))
                .collect::<Result<_>>()?,
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| -> Result<(String, Value)> { Ok((k.clone(), fill_seats(v, table)?)) })
                .collect::<Result<_>>()?,
        ),
        _ => value.clone(),
    })
}

/// Round state of a scripted round
#[derive(Debug, Clone)]
pub struct ScriptedState {
    round_count: u32,
    step: usize,
    phase: Phase,
    table: Table,
}

impl RoundState for ScriptedState {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn table(&self) -> &Table {
        &self.table
    }

    fn into_table(self) -> Table {
        self.table
    }
}

/// Round engine that replays scripted rounds and records every decision
#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    rounds: Vec<ScriptedRound>,
    decisions: Vec<(u32, Decision)>,
}

impl ScriptedEngine {
    pub fn new(rounds: Vec<ScriptedRound>) -> Self {
        Self {
            rounds,
            decisions: Vec::new(),
        }
    }

    pub fn from_script(script: &Script) -> Self {
        Self::new(script.rounds.clone())
    }

    /// Decisions applied so far, tagged with their round
    pub fn decisions(&self) -> &[(u32, Decision)] {
        &self.decisions
    }

    fn emit(&self, round_count: u32, step: usize, mut table: Table) -> Result<Step<ScriptedState>> {
        let round = round_count
            .checked_sub(1)
            .and_then(|i| self.rounds.get(i as usize))
            .ok_or_else(|| DealerError::Engine(format!("no scripted round {}", round_count)))?;
        let scripted = round.steps.get(step).ok_or_else(|| {
            DealerError::Engine(format!("round {} has no step {}", round_count, step))
        })?;

        if let Some(stacks) = &scripted.stacks {
            for (pos, stack) in stacks.iter().enumerate() {
                table.seat_mut(pos)?.stack = *stack;
            }
        }
        let messages = scripted
            .messages
            .iter()
            .map(|m| m.resolve(&table))
            .collect::<Result<Vec<_>>>()?;
        let phase = if scripted.finished {
            Phase::Finished
        } else {
            Phase::InProgress
        };

        debug!(
            "Scripted round {} step {} emits {} messages",
            round_count,
            step,
            messages.len()
        );
        let state = ScriptedState {
            round_count,
            step,
            phase,
            table,
        };
        Ok((state, messages))
    }
}

impl RoundEngine for ScriptedEngine {
    type State = ScriptedState;

    fn start_round(
        &mut self,
        round_count: u32,
        _small_blind_amount: Chips,
        mut table: Table,
    ) -> Result<Step<ScriptedState>> {
        table.reset_round_status();
        self.emit(round_count, 0, table)
    }

    fn apply_action(&mut self, state: ScriptedState, decision: Decision) -> Result<Step<ScriptedState>> {
        if state.phase == Phase::Finished {
            return Err(DealerError::Engine(format!(
                "round {} is already finished",
                state.round_count
            )));
        }
        self.decisions.push((state.round_count, decision));
        self.emit(state.round_count, state.step + 1, state.table)
    }
}
