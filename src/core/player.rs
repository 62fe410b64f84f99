//! Player identification and per-seat state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are numbered by insertion order when
//! the game is created, and that order never changes for the lifetime of
//! the game (tie-breaks exclude seats via the spectator flag instead of
//! reordering).
//!
//! ## Seat
//!
//! One concrete player-state type for humans and bots alike, with an
//! explicit `is_automated` flag. The bot decision hook is only invoked
//! for automated seats.

use serde::{Deserialize, Serialize};

use crate::dice::RollOutcome;

/// Seat identifier, 0-based in roster insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-turn mutable state for one seat.
///
/// Reset at the start of the seat's turn; only ever mutated by that
/// seat's own roll/bank actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Points accumulated this turn, forfeited on bust.
    pub turn_points: u32,
    /// Dice remaining in the pool this turn.
    pub dice_count: u32,
    /// Breakdown of the most recent roll, if any this turn.
    pub last_roll: Option<RollOutcome>,
}

impl TurnState {
    /// Reset for the start of a turn with a fresh dice pool.
    pub fn reset(&mut self, starting_dice: u32) {
        self.turn_points = 0;
        self.dice_count = starting_dice;
        self.last_roll = None;
    }
}

/// One seat at the table: identity plus turn state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Stable identifier, equal to the seat's roster index.
    pub id: PlayerId,
    /// Display name, opaque to the engine.
    pub name: String,
    /// Whether this seat is driven by the bot policy on ticks.
    pub is_automated: bool,
    /// Excluded from turn order (set for non-tied seats during tie-breaks).
    pub is_spectator: bool,
    /// State of this seat's current turn.
    pub turn: TurnState,
}

impl Seat {
    /// Create a seat with empty turn state.
    pub fn new(id: PlayerId, name: impl Into<String>, is_automated: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_automated,
            is_spectator: false,
            turn: TurnState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_seat_new() {
        let seat = Seat::new(PlayerId::new(2), "Alice", false);

        assert_eq!(seat.id, PlayerId::new(2));
        assert_eq!(seat.name, "Alice");
        assert!(!seat.is_automated);
        assert!(!seat.is_spectator);
        assert_eq!(seat.turn.turn_points, 0);
        assert_eq!(seat.turn.dice_count, 0);
        assert!(seat.turn.last_roll.is_none());
    }

    #[test]
    fn test_turn_state_reset() {
        let mut turn = TurnState {
            turn_points: 18,
            dice_count: 3,
            last_roll: Some(RollOutcome {
                favorable: 2,
                neutral: 1,
                unfavorable: 0,
            }),
        };

        turn.reset(10);

        assert_eq!(turn.turn_points, 0);
        assert_eq!(turn.dice_count, 10);
        assert!(turn.last_roll.is_none());
    }

    #[test]
    fn test_seat_serde() {
        let mut seat = Seat::new(PlayerId::new(1), "Bot", true);
        seat.turn.turn_points = 7;
        seat.turn.dice_count = 4;

        let json = serde_json::to_string(&seat).unwrap();
        let deserialized: Seat = serde_json::from_str(&json).unwrap();

        assert_eq!(seat, deserialized);
    }
}
