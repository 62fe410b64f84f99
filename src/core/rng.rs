//! Deterministic random number generation.
//!
//! Every random draw in the engine (dice faces, bot targets, bot bank
//! decisions) goes through a single `GameRng` owned by the game state.
//! The RNG state is captured into snapshots so a reloaded game replays
//! exactly the draw sequence the live game would have produced.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing all engine randomness.
///
/// Uses ChaCha8 for speed while keeping O(1) state capture via the
/// stream word position.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for snapshots.
///
/// The ChaCha8 word position makes serialization O(1) regardless of how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_state_restore_resumes_sequence() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.gen_range(0..1000);
        }

        let state = rng.state();

        let expected: Vec<_> = (0..10).map(|_| rng.gen_range(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(7);
        for _ in 0..20 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
        }
    }
}
