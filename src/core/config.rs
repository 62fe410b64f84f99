//! Game configuration: rule variant and table options.
//!
//! Configuration is validated up front and immutable for the lifetime of
//! a game. Invalid values are rejected with `ConfigError` before any game
//! state exists.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum seats at a table.
pub const MIN_PLAYERS: usize = 2;
/// Maximum seats at a table.
pub const MAX_PLAYERS: usize = 8;

const MIN_TARGET_SCORE: u32 = 20;
const MAX_TARGET_SCORE: u32 = 500;
const MIN_STARTING_DICE: u32 = 5;
const MAX_STARTING_DICE: u32 = 20;

/// Rule variant selecting die faces and bust classification.
///
/// The two variants intentionally disagree on what busts: Standard busts
/// on any red with no green, Alternate only when every die is red.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// 6-sided die: 3 green, 2 yellow, 1 red faces.
    #[default]
    Standard,
    /// 3-sided die: one face of each color.
    Alternate,
}

/// Immutable table options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Banked score needed to qualify as a winner at round end.
    pub target_score: u32,
    /// Dice handed to a seat at turn start and on pool refresh.
    pub starting_dice: u32,
    /// Rule variant.
    pub variant: Variant,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: 100,
            starting_dice: 10,
            variant: Variant::Standard,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default option values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target score.
    #[must_use]
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Set the starting dice count.
    #[must_use]
    pub fn with_starting_dice(mut self, starting_dice: u32) -> Self {
        self.starting_dice = starting_dice;
        self
    }

    /// Set the rule variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Check option values against their allowed ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TARGET_SCORE..=MAX_TARGET_SCORE).contains(&self.target_score) {
            return Err(ConfigError::TargetScoreOutOfRange {
                got: self.target_score,
                min: MIN_TARGET_SCORE,
                max: MAX_TARGET_SCORE,
            });
        }
        if !(MIN_STARTING_DICE..=MAX_STARTING_DICE).contains(&self.starting_dice) {
            return Err(ConfigError::StartingDiceOutOfRange {
                got: self.starting_dice,
                min: MIN_STARTING_DICE,
                max: MAX_STARTING_DICE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();

        assert_eq!(config.target_score, 100);
        assert_eq!(config.starting_dice, 10);
        assert_eq!(config.variant, Variant::Standard);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_target_score(50)
            .with_starting_dice(15)
            .with_variant(Variant::Alternate);

        assert_eq!(config.target_score, 50);
        assert_eq!(config.starting_dice, 15);
        assert_eq!(config.variant, Variant::Alternate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_score_bounds() {
        assert!(GameConfig::new().with_target_score(19).validate().is_err());
        assert!(GameConfig::new().with_target_score(20).validate().is_ok());
        assert!(GameConfig::new().with_target_score(500).validate().is_ok());
        assert!(GameConfig::new().with_target_score(501).validate().is_err());
    }

    #[test]
    fn test_starting_dice_bounds() {
        assert!(GameConfig::new().with_starting_dice(4).validate().is_err());
        assert!(GameConfig::new().with_starting_dice(5).validate().is_ok());
        assert!(GameConfig::new().with_starting_dice(20).validate().is_ok());
        assert!(GameConfig::new().with_starting_dice(21).validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_variant(Variant::Alternate);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
