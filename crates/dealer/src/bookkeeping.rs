//! Between-round bookkeeping: button rotation, blind checks, elimination

use dealer_core::{GameConfig, Result, Table};
use tracing::info;

/// Ready the table for the next round
///
/// Rotates the button, zeroes the stacks of blind seats that cannot cover
/// their blind, then eliminates every seat left with nothing.
pub fn prepare_for_next_round(table: &mut Table, config: &GameConfig) -> Result<()> {
    if table.is_empty() {
        return Ok(());
    }
    table.rotate_dealer_button();
    let small_blind_pos = table.dealer_button();
    let big_blind_pos = table.next_active_seat_after(small_blind_pos);
    exclude_short_blinds(table, small_blind_pos, big_blind_pos, config)?;
    exclude_broke_players(table)?;
    Ok(())
}

/// Zero the stack of a blind seat that cannot post its blind
pub fn exclude_short_blinds(
    table: &mut Table,
    small_blind_pos: usize,
    big_blind_pos: Option<usize>,
    config: &GameConfig,
) -> Result<()> {
    let small_blind_amount = config.small_blind_amount;
    let seat = table.seat_mut(small_blind_pos)?;
    if seat.stack < small_blind_amount {
        info!(
            "{} cannot post small blind {} (stack {})",
            seat.name, small_blind_amount, seat.stack
        );
        seat.stack = 0;
    }

    if let Some(pos) = big_blind_pos {
        let big_blind_amount = config.big_blind_amount();
        let seat = table.seat_mut(pos)?;
        if seat.stack < big_blind_amount {
            info!(
                "{} cannot post big blind {} (stack {})",
                seat.name, big_blind_amount, seat.stack
            );
            seat.stack = 0;
        }
    }
    Ok(())
}

/// Eliminate every seat with an empty stack; returns the newly eliminated
/// positions
pub fn exclude_broke_players(table: &mut Table) -> Result<Vec<usize>> {
    let broke: Vec<usize> = table
        .seats()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.stack == 0 && !s.is_eliminated())
        .map(|(pos, _)| pos)
        .collect();

    for &pos in &broke {
        table.eliminate(pos)?;
        info!("{} eliminated", table.seat(pos)?.name);
    }
    Ok(broke)
}
