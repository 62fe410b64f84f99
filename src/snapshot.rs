//! Full-fidelity state snapshots.
//!
//! A [`GameSnapshot`] is the flat, serializable projection of a
//! [`GameEngine`]: seats (with mid-turn state), ledger totals, round and
//! turn position, phase and the RNG position. `restore(capture(e))` is
//! observably identical to `e`.
//!
//! Two engine fields are deliberately not captured: the bot's cached
//! per-turn target (re-derived lazily on the first tick after reload)
//! and the pending event queue (notifications belong to the session that
//! produced them).
//!
//! Decoding is all-or-nothing: malformed bytes or an internally
//! inconsistent snapshot yield `SnapshotError` and no engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameConfig, GameRng, GameRngState, PlayerId, Seat};
use crate::engine::{GameEngine, GameStatus};
use crate::error::SnapshotError;
use crate::score::MemoryLedger;

/// Serializable projection of the whole game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    config: GameConfig,
    seats: Vec<Seat>,
    ledger: MemoryLedger,
    status: GameStatus,
    round: u32,
    turn_order: SmallVec<[PlayerId; 8]>,
    turn_index: usize,
    rng: GameRngState,
}

impl GameSnapshot {
    /// Capture the persistent state of a running engine.
    #[must_use]
    pub fn capture(engine: &GameEngine) -> Self {
        Self {
            config: engine.config,
            seats: engine.seats.clone(),
            ledger: engine.ledger.clone(),
            status: engine.status,
            round: engine.round,
            turn_order: engine.turn_order.clone(),
            turn_index: engine.turn_index,
            rng: engine.rng.state(),
        }
    }

    /// Rebuild an engine from this snapshot.
    ///
    /// Validates internal consistency first; a snapshot that decodes but
    /// does not describe a reachable state is rejected.
    pub fn restore(self) -> Result<GameEngine, SnapshotError> {
        self.validate()?;

        let rng = GameRng::from_state(&self.rng);
        Ok(GameEngine::from_parts(
            self.config,
            self.seats,
            self.ledger,
            self.status,
            self.round,
            self.turn_order,
            self.turn_index,
            rng,
        ))
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes. All-or-nothing: any failure yields an error
    /// and no partially built snapshot.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.config.validate().is_err() {
            return Err(SnapshotError::Inconsistent(
                "configuration out of bounds".into(),
            ));
        }
        if self.ledger.player_count() != self.seats.len() {
            return Err(SnapshotError::Inconsistent(format!(
                "ledger tracks {} seats, roster has {}",
                self.ledger.player_count(),
                self.seats.len()
            )));
        }
        for (i, seat) in self.seats.iter().enumerate() {
            if seat.id.index() != i {
                return Err(SnapshotError::Inconsistent(format!(
                    "seat {} stored at index {}",
                    seat.id, i
                )));
            }
        }
        if self
            .turn_order
            .iter()
            .any(|p| p.index() >= self.seats.len())
        {
            return Err(SnapshotError::Inconsistent(
                "turn order references unknown seat".into(),
            ));
        }
        if self.status == GameStatus::Playing && self.turn_index >= self.turn_order.len() {
            return Err(SnapshotError::Inconsistent(format!(
                "turn index {} out of range for {} seats in play",
                self.turn_index,
                self.turn_order.len()
            )));
        }
        Ok(())
    }
}

impl GameEngine {
    /// Snapshot and encode the current state.
    pub fn encode_state(&self) -> Result<Vec<u8>, SnapshotError> {
        GameSnapshot::capture(self).encode()
    }

    /// Decode and restore a state previously produced by
    /// [`encode_state`](Self::encode_state).
    pub fn decode_state(bytes: &[u8]) -> Result<Self, SnapshotError> {
        GameSnapshot::decode(bytes)?.restore()
    }
}
