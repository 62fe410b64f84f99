//! Structured notifications for presentation layers.
//!
//! The engine records a [`GameEvent`] for everything a UI, sound layer or
//! commentary system would want to announce. Events carry raw counts and
//! identities; rendering, localization and audio stay outside the engine.
//!
//! Events are ephemeral: hosts drain them after driving the engine, and
//! they are not part of snapshots.

use crate::core::PlayerId;
use crate::dice::RollOutcome;

/// Something a presentation layer may want to announce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round began.
    RoundStarted { round: u32 },
    /// A seat's turn began.
    TurnStarted { player: PlayerId, score: u32 },
    /// A seat rolled the dice.
    Rolled {
        player: PlayerId,
        outcome: RollOutcome,
    },
    /// The roll busted; `lost` turn points were forfeited.
    Busted { player: PlayerId, lost: u32 },
    /// The pool emptied without busting; a fresh set of dice was issued.
    FreshDice { player: PlayerId, count: u32 },
    /// A seat banked `amount` points for a new banked `total`.
    Banked {
        player: PlayerId,
        amount: u32,
        total: u32,
    },
    /// Round ended with a winning-score tie; non-tied seats became
    /// spectators and a tie-break round follows.
    TieBreak { players: Vec<PlayerId> },
    /// The game ended with a single winner.
    GameOver { winner: PlayerId, score: u32 },
}
