//! Banked score tracking.
//!
//! The engine only ever touches scores through the narrow [`ScoreLedger`]
//! interface: add on bank, read for winner checks and bot targeting.
//! Scores are monotonically non-decreasing for the lifetime of a game.
//! [`MemoryLedger`] is the in-process implementation the engine ships
//! with; a host can inspect it for display but should mutate it only
//! through the engine.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Narrow scoring interface consumed by the state machine.
pub trait ScoreLedger {
    /// Add banked points to a player's total.
    fn add_score(&mut self, player: PlayerId, amount: u32);

    /// Get a player's banked total.
    fn score(&self, player: PlayerId) -> u32;
}

/// In-memory ledger, one total per seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryLedger {
    totals: Vec<u32>,
}

impl MemoryLedger {
    /// Create a ledger with zeroed totals for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            totals: vec![0; player_count],
        }
    }

    /// Number of seats tracked.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.totals.len()
    }
}

impl ScoreLedger for MemoryLedger {
    fn add_score(&mut self, player: PlayerId, amount: u32) {
        self.totals[player.index()] += amount;
    }

    fn score(&self, player: PlayerId) -> u32 {
        self.totals.get(player.index()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_is_zeroed() {
        let ledger = MemoryLedger::new(4);

        assert_eq!(ledger.player_count(), 4);
        for i in 0..4 {
            assert_eq!(ledger.score(PlayerId::new(i)), 0);
        }
    }

    #[test]
    fn test_add_score_accumulates() {
        let mut ledger = MemoryLedger::new(2);
        let alice = PlayerId::new(0);
        let bob = PlayerId::new(1);

        ledger.add_score(alice, 15);
        ledger.add_score(alice, 25);
        ledger.add_score(bob, 7);

        assert_eq!(ledger.score(alice), 40);
        assert_eq!(ledger.score(bob), 7);
    }

    #[test]
    fn test_unknown_player_scores_zero() {
        let ledger = MemoryLedger::new(2);
        assert_eq!(ledger.score(PlayerId::new(9)), 0);
    }

    #[test]
    fn test_ledger_serde() {
        let mut ledger = MemoryLedger::new(3);
        ledger.add_score(PlayerId::new(1), 42);

        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: MemoryLedger = serde_json::from_str(&json).unwrap();

        assert_eq!(ledger, deserialized);
    }
}
