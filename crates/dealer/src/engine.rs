//! Round engine trait
//!
//! The per-round betting state machine lives outside this crate. The dealer
//! only needs to start a round, feed it decisions, and read back whether the
//! round is finished and what the table looks like.

use dealer_core::{Chips, Decision, Message, Result, Table};

/// Whether a round still needs decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Finished,
}

/// Round state as seen by the dealer
pub trait RoundState {
    fn phase(&self) -> Phase;

    fn table(&self) -> &Table;

    /// Hand the table back once the round is over
    fn into_table(self) -> Table;
}

/// Output of every engine step: the new state and the ordered batch of
/// messages to publish
pub type Step<S> = (S, Vec<Message>);

/// Trait for implementing round engines
///
/// Implement this trait to plug a betting state machine into the dealer.
/// Every batch returned must end with an ask while the round is in progress,
/// and with the round-result notification once it is finished.
pub trait RoundEngine {
    type State: RoundState;

    /// Deal a new round at `table`
    fn start_round(
        &mut self,
        round_count: u32,
        small_blind_amount: Chips,
        table: Table,
    ) -> Result<Step<Self::State>>;

    /// Apply the answer to the last ask
    fn apply_action(&mut self, state: Self::State, decision: Decision) -> Result<Step<Self::State>>;
}

impl<E: RoundEngine + ?Sized> RoundEngine for &mut E {
    type State = E::State;

    fn start_round(
        &mut self,
        round_count: u32,
        small_blind_amount: Chips,
        table: Table,
    ) -> Result<Step<Self::State>> {
        (**self).start_round(round_count, small_blind_amount, table)
    }

    fn apply_action(&mut self, state: Self::State, decision: Decision) -> Result<Step<Self::State>> {
        (**self).apply_action(state, decision)
    }
}
