//! # tossup
//!
//! Rules engine for Toss Up, a push-your-luck dice game for 2-8 seats
//! (human or automated).
//!
//! Each turn a player repeatedly rolls a shrinking pool of dice: green
//! faces bank potential points and leave the pool, a roll with no greens
//! can bust (ending the turn with zero gain), and the player may bank at
//! any time to convert turn points into permanent score. First to the
//! target score at a round boundary wins; exact ties trigger tie-break
//! rounds restricted to the tied seats.
//!
//! ## Design
//!
//! - **Deterministic**: all randomness flows through one seeded
//!   [`GameRng`] serialized with the state, so games replay exactly.
//! - **Turn-serialized**: operations are synchronous and complete within
//!   the call; preconditions (not locks) enforce that only the current
//!   seat can act. A snapshot between any two calls is consistent.
//! - **Snapshot-safe**: [`GameSnapshot`] round-trips the entire mutable
//!   state through bytes; a game can be persisted and reloaded between
//!   ticks at any point.
//! - **Headless**: presentation concerns surface as structured
//!   [`GameEvent`]s for an external layer to render.
//!
//! ## Modules
//!
//! - `core`: player seats, deterministic RNG, configuration
//! - `dice`: roll resolution and variant-specific bust classification
//! - `score`: the narrow scoring interface and in-memory ledger
//! - `bot`: automated-seat target derivation and roll/bank policy
//! - `engine`: the round/turn state machine
//! - `events`: notifications for presentation layers
//! - `snapshot`: encode/decode of the full game state
//! - `error`: typed rejection and failure reasons

pub mod bot;
pub mod core;
pub mod dice;
pub mod engine;
pub mod error;
pub mod events;
pub mod score;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, PlayerId, Seat, TurnState, Variant};

pub use crate::bot::{BotAction, DEFAULT_TARGET, UNREACHABLE_TARGET};
pub use crate::dice::{resolve, RollOutcome};
pub use crate::engine::{GameEngine, GameStatus, RollResult, SeatConfig};
pub use crate::error::{ActionError, ConfigError, SnapshotError};
pub use crate::events::GameEvent;
pub use crate::score::{MemoryLedger, ScoreLedger};
pub use crate::snapshot::GameSnapshot;
