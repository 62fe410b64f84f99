//! Dice resolution and bust classification.
//!
//! A roll turns a pool of dice into three face counts: green (scores a
//! point and leaves the pool for the rest of the turn), yellow (scores
//! nothing) and red (the danger face). Yellow and red dice are rolled
//! again next time. Face probabilities and the bust rule both depend on
//! the [`Variant`]:
//!
//! - Standard rolls a 6-sided die (3 green, 2 yellow, 1 red faces) and
//!   busts when there is at least one red and no green. An all-yellow
//!   roll is safe even though it scores nothing.
//! - Alternate rolls a 3-sided die (one face each) and busts only when
//!   every die comes up red.
//!
//! The asymmetry between the two bust rules is deliberate game design,
//! not a shared rule with different constants.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Variant};

/// Face counts of one roll. Counts always sum to the number of dice rolled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Green dice: each adds one turn point and leaves the pool.
    pub favorable: u32,
    /// Yellow dice: score nothing, stay in the pool.
    pub neutral: u32,
    /// Red dice: the danger face, stay in the pool.
    pub unfavorable: u32,
}

impl RollOutcome {
    /// Total dice rolled.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.favorable + self.neutral + self.unfavorable
    }

    /// Dice left in the pool after this roll (greens removed).
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.neutral + self.unfavorable
    }

    /// Whether this roll busts under the given variant.
    #[must_use]
    pub fn is_bust(&self, variant: Variant) -> bool {
        match variant {
            Variant::Standard => self.favorable == 0 && self.unfavorable > 0,
            Variant::Alternate => self.favorable == 0 && self.neutral == 0,
        }
    }
}

/// Roll `dice_count` dice under the given variant.
///
/// Each die draws its face independently. Randomness comes exclusively
/// from the supplied `rng` so sequences can be replayed.
#[must_use]
pub fn resolve(dice_count: u32, variant: Variant, rng: &mut GameRng) -> RollOutcome {
    let mut outcome = RollOutcome::default();

    for _ in 0..dice_count {
        match variant {
            Variant::Standard => match rng.gen_range(0..6) {
                0..=2 => outcome.favorable += 1,
                3..=4 => outcome.neutral += 1,
                _ => outcome.unfavorable += 1,
            },
            Variant::Alternate => match rng.gen_range(0..3) {
                0 => outcome.favorable += 1,
                1 => outcome.neutral += 1,
                _ => outcome.unfavorable += 1,
            },
        }
    }

    outcome
}
