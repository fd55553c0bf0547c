//! Round driver
//!
//! Drives one round to completion: the engine produces batches, the router
//! publishes them, and the reply to each trailing ask goes back into the
//! engine. The shape of the trailing message is the only synchronization
//! signal between the engine and the agents, so a batch that does not end the
//! way the phase demands stops the game before anything in it is delivered.

use dealer_core::{Chips, Decision, DealerError, Message, Result, Table, describe_batch};
use tracing::{debug, info, warn};

use crate::engine::{Phase, RoundEngine, RoundState};
use crate::router::MessageRouter;
use crate::summary::MessageSummarizer;

/// Play round `round_count` on `table` and return the table afterwards
pub fn play_round<E: RoundEngine>(
    engine: &mut E,
    router: &mut MessageRouter,
    summarizer: &MessageSummarizer,
    round_count: u32,
    small_blind_amount: Chips,
    table: Table,
) -> Result<Table> {
    info!("Round {} starting", round_count);
    let (mut state, mut messages) = engine.start_round(round_count, small_blind_amount, table)?;

    loop {
        let phase = state.phase();
        check_batch(&messages, phase)?;
        summarizer.summarize_messages(&messages);
        let reply = publish_messages(router, &messages)?;

        match phase {
            Phase::Finished => {
                info!("Round {} finished", round_count);
                return Ok(state.into_table());
            }
            Phase::InProgress => {
                // check_batch guarantees the trailing message was an ask
                let decision = reply.ok_or_else(|| {
                    DealerError::ProtocolDesync(format!(
                        "ask went unanswered: {}",
                        describe_batch(&messages)
                    ))
                })?;
                debug!("Round {} applying {}", round_count, decision);
                (state, messages) = engine.apply_action(state, decision)?;
            }
        }
    }
}

/// Validate the trailing message of a batch against the round phase
///
/// In progress, the batch must end with an ask. Finished, it must end with
/// the round-result notification.
pub fn check_batch(messages: &[Message], phase: Phase) -> Result<()> {
    let last = messages
        .last()
        .ok_or_else(|| DealerError::ProtocolDesync("empty message batch".into()))?;

    let (valid, expected) = match phase {
        Phase::InProgress => (last.is_ask(), "an ask"),
        Phase::Finished => (last.is_round_result(), "the round result"),
    };
    if !valid {
        return Err(DealerError::ProtocolDesync(format!(
            "last message is not {}: {}",
            expected,
            describe_batch(messages)
        )));
    }
    Ok(())
}

/// Deliver every message in order; returns the reply to the last one
fn publish_messages(router: &mut MessageRouter, messages: &[Message]) -> Result<Option<Decision>> {
    let Some((last, rest)) = messages.split_last() else {
        return Ok(None);
    };
    for message in rest {
        if let Some(decision) = router.deliver(message)? {
            warn!("Discarding reply {} to non-final {}", decision, message);
        }
    }
    router.deliver(last)
}
