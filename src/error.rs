//! Error taxonomy.
//!
//! Three disjoint classes, matching how they are handled:
//!
//! - `ActionError`: recoverable rejection of a roll/bank request. The
//!   request is refused before any state mutation, so the caller can
//!   simply report it and carry on.
//! - `ConfigError`: fatal to game creation; raised before any game state
//!   exists.
//! - `SnapshotError`: fatal decode failure; decoding is all-or-nothing
//!   and never yields a partially initialized game.

use thiserror::Error;

use crate::core::PlayerId;

/// A roll or bank request was rejected. No state was mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("game is not in the playing phase")]
    NotPlaying,
    #[error("{0} acted out of turn")]
    NotYourTurn(PlayerId),
    #[error("{0} is a spectator")]
    Spectator(PlayerId),
    #[error("{0} has no turn points to bank")]
    NothingToBank(PlayerId),
    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),
}

/// Game creation was rejected. No game state was constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count out of range (got={got}, min={min}, max={max})")]
    PlayerCountOutOfRange { got: usize, min: usize, max: usize },
    #[error("target score out of range (got={got}, min={min}, max={max})")]
    TargetScoreOutOfRange { got: u32, min: u32, max: u32 },
    #[error("starting dice out of range (got={got}, min={min}, max={max})")]
    StartingDiceOutOfRange { got: u32, min: u32, max: u32 },
}

/// A snapshot could not be decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] bincode::Error),
    #[error("snapshot is internally inconsistent: {0}")]
    Inconsistent(String),
}
