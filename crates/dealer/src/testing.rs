//! Test doubles shared by the unit tests

use dealer_core::{
    Agent, Chips, DealerError, Decision, Message, MessageKind, Payload, PlayerId, Result, Table,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::engine::{Phase, RoundEngine, RoundState, Step};

/// What an agent saw
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Identified(PlayerId),
    Asked(MessageKind),
    Notified(MessageKind),
}

/// Shared, ordered log of everything every recording agent saw
#[derive(Debug, Clone, Default)]
pub struct Transcript(Rc<RefCell<Vec<(String, Event)>>>);

impl Transcript {
    fn push(&self, agent: &str, event: Event) {
        self.0.borrow_mut().push((agent.to_string(), event));
    }

    /// Asks and notifications, in delivery order
    pub fn events(&self) -> Vec<(String, Event)> {
        self.0
            .borrow()
            .iter()
            .filter(|(_, e)| !matches!(e, Event::Identified(_)))
            .cloned()
            .collect()
    }

    pub fn identifiers(&self) -> Vec<(String, PlayerId)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|(name, e)| match e {
                Event::Identified(id) => Some((name.clone(), id.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn notified(&self) -> Vec<(String, MessageKind)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|(name, e)| match e {
                Event::Notified(kind) => Some((name.clone(), kind.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn asked(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter(|(_, e)| matches!(e, Event::Asked(_)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Kinds one agent was notified of, in order
    pub fn notified_to(&self, agent: &str) -> Vec<MessageKind> {
        self.notified()
            .into_iter()
            .filter(|(name, _)| name == agent)
            .map(|(_, kind)| kind)
            .collect()
    }
}

/// Agent that logs every call and answers from a queue of replies
pub struct RecordingAgent {
    name: String,
    transcript: Transcript,
    replies: VecDeque<Decision>,
}

impl RecordingAgent {
    pub fn new(name: &str, transcript: &Transcript) -> Self {
        Self {
            name: name.to_string(),
            transcript: transcript.clone(),
            replies: VecDeque::new(),
        }
    }

    /// Queue replies; once exhausted the agent folds
    pub fn replying(mut self, replies: Vec<Decision>) -> Self {
        self.replies.extend(replies);
        self
    }
}

impl Agent for RecordingAgent {
    fn respond_to_request(&mut self, payload: &Payload) -> Decision {
        self.transcript
            .push(&self.name, Event::Asked(payload.kind.clone()));
        self.replies.pop_front().unwrap_or_else(Decision::fold)
    }

    fn receive_notification(&mut self, payload: &Payload) {
        self.transcript
            .push(&self.name, Event::Notified(payload.kind.clone()));
    }

    fn set_identifier(&mut self, id: &PlayerId) {
        self.transcript.push(&self.name, Event::Identified(id.clone()));
    }
}

/// Engine that hands out pre-built batches in order, across rounds
pub struct QueueEngine {
    steps: VecDeque<(Phase, Vec<Message>)>,
    applied: Vec<Decision>,
    rounds: Vec<u32>,
}

pub struct QueueState {
    phase: Phase,
    table: Table,
}

impl RoundState for QueueState {
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

impl QueueEngine {
    pub fn new(steps: Vec<(Phase, Vec<Message>)>) -> Self {
        Self {
            steps: steps.into(),
            applied: Vec::new(),
            rounds: Vec::new(),
        }
    }

    pub fn applied(&self) -> &[Decision] {
        &self.applied
    }

    /// Round numbers started, in order
    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }

    fn next(&mut self, table: Table) -> Result<Step<QueueState>> {
        let (phase, messages) = self
            .steps
            .pop_front()
            .ok_or_else(|| DealerError::Engine("queue exhausted".into()))?;
        Ok((QueueState { phase, table }, messages))
    }
}

impl RoundEngine for QueueEngine {
    type State = QueueState;

    fn start_round(&mut self, round_count: u32, _: Chips, table: Table) -> Result<Step<QueueState>> {
        self.rounds.push(round_count);
        self.next(table)
    }

    fn apply_action(&mut self, state: QueueState, decision: Decision) -> Result<Step<QueueState>> {
        self.applied.push(decision);
        self.next(state.table)
    }
}
