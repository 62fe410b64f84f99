//! Core engine types: players, RNG, configuration.
//!
//! These are the building blocks the state machine is assembled from.
//! Nothing here drives the game on its own.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, Variant, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{PlayerId, Seat, TurnState};
pub use rng::{GameRng, GameRngState};
