//! Seating, stacks and the dealer button

use serde::{Deserialize, Serialize};

use crate::error::{DealerError, Result};
use crate::ids::PlayerId;

/// Chip amounts: stacks, blinds, bets
pub type Chips = u64;

/// Status of a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Playing the current round
    Active,
    /// Folded out of the current round
    Folded,
    /// Out of the game for good
    Eliminated,
}

/// One player at the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub uuid: PlayerId,
    pub name: String,
    pub stack: Chips,
    #[serde(rename = "state")]
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(uuid: PlayerId, name: impl Into<String>, stack: Chips) -> Self {
        Self {
            uuid,
            name: name.into(),
            stack,
            status: SeatStatus::Active,
        }
    }

    /// Still in the game (not eliminated)
    pub fn is_active(&self) -> bool {
        self.status != SeatStatus::Eliminated
    }

    pub fn is_eliminated(&self) -> bool {
        self.status == SeatStatus::Eliminated
    }
}

/// Ordered seating plus the dealer button
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    seats: Vec<Seat>,
    dealer_button: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player at the next free position, returning that position
    pub fn sit_down(&mut self, seat: Seat) -> usize {
        self.seats.push(seat);
        self.seats.len() - 1
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seat(&self, pos: usize) -> Result<&Seat> {
        self.seats.get(pos).ok_or(DealerError::SeatOutOfRange(pos))
    }

    pub fn seat_mut(&mut self, pos: usize) -> Result<&mut Seat> {
        self.seats.get_mut(pos).ok_or(DealerError::SeatOutOfRange(pos))
    }

    pub fn dealer_button(&self) -> usize {
        self.dealer_button
    }

    /// Move the button to the next seat still able to play.
    /// The button stays put when no such seat exists.
    pub fn rotate_dealer_button(&mut self) {
        if let Some(next) = self.next_active_seat_after(self.dealer_button) {
            self.dealer_button = next;
        }
    }

    /// First seat after `pos` (wrapping, `pos` itself last) that is not
    /// eliminated and has chips behind
    pub fn next_active_seat_after(&self, pos: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|offset| (pos + offset) % n)
            .find(|&idx| {
                let seat = &self.seats[idx];
                seat.is_active() && seat.stack > 0
            })
    }

    /// Remove a seat from play for the rest of the game
    pub fn eliminate(&mut self, pos: usize) -> Result<()> {
        self.seat_mut(pos)?.status = SeatStatus::Eliminated;
        Ok(())
    }

    /// Seats not yet eliminated
    pub fn active_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_active()).count()
    }

    /// Clear per-round folds; eliminated seats stay eliminated
    pub fn reset_round_status(&mut self) {
        for seat in &mut self.seats {
            if seat.status == SeatStatus::Folded {
                seat.status = SeatStatus::Active;
            }
        }
    }

    pub fn total_chips(&self) -> Chips {
        self.seats.iter().map(|s| s.stack).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[Chips]) -> Table {
        let mut table = Table::new();
        for (i, stack) in stacks.iter().enumerate() {
            table.sit_down(Seat::new(
                PlayerId::new(format!("p{}", i)),
                format!("player{}", i),
                *stack,
            ));
        }
        table
    }

    #[test]
    fn test_next_active_seat_wraps_and_skips() {
        let mut t = table(&[100, 0, 100, 100]);
        t.eliminate(2).unwrap();
        assert_eq!(t.next_active_seat_after(0), Some(3));
        assert_eq!(t.next_active_seat_after(3), Some(0));
        // the start position itself is the last candidate
        let solo = table(&[50]);
        assert_eq!(solo.next_active_seat_after(0), Some(0));
    }

    #[test]
    fn test_next_active_seat_none() {
        let t = table(&[0, 0]);
        assert_eq!(t.next_active_seat_after(0), None);
        assert_eq!(Table::new().next_active_seat_after(0), None);
    }

    #[test]
    fn test_rotate_dealer_button() {
        let mut t = table(&[100, 100, 100]);
        t.rotate_dealer_button();
        assert_eq!(t.dealer_button(), 1);
        t.eliminate(2).unwrap();
        t.rotate_dealer_button();
        assert_eq!(t.dealer_button(), 0);

        let mut broke = table(&[0, 0]);
        broke.rotate_dealer_button();
        assert_eq!(broke.dealer_button(), 0);
    }

    #[test]
    fn test_reset_keeps_eliminated() {
        let mut t = table(&[100, 100, 0]);
        t.seat_mut(0).unwrap().status = SeatStatus::Folded;
        t.eliminate(2).unwrap();
        t.reset_round_status();
        assert_eq!(t.seat(0).unwrap().status, SeatStatus::Active);
        assert_eq!(t.seat(2).unwrap().status, SeatStatus::Eliminated);
        assert_eq!(t.active_count(), 2);
    }

    #[test]
    fn test_seat_out_of_range() {
        let mut t = table(&[100]);
        assert!(matches!(t.eliminate(3), Err(DealerError::SeatOutOfRange(3))));
    }
}
