//! Automated-seat decision policy.
//!
//! A bot picks a turn-points target when its turn starts, then on each
//! tick chooses to roll or bank by comparing accumulated turn points
//! against that target. The target reacts to the table:
//!
//! - Normally a uniform draw from 10..=25.
//! - If an opponent already has a winning score, the target becomes
//!   exactly the points needed to overtake them this turn.
//! - If an opponent is within 20 of the target score, the bot goes
//!   desperate: an unreachable target, so it only banks on a win.
//!
//! Once past its target, the bot banks with a probability that grows as
//! the pool shrinks (more dice in play is read as more chances to bust
//! before the pool clears). The probabilities are tuned constants, not
//! derived from the face odds.

use crate::core::{GameConfig, GameRng, PlayerId, TurnState};

/// Fallback target when a turn target has not been derived yet, e.g.
/// the first tick after a snapshot reload.
pub const DEFAULT_TARGET: u32 = 15;

/// Sentinel target no turn can reach; "never bank voluntarily".
pub const UNREACHABLE_TARGET: u32 = 999;

/// What the bot wants to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotAction {
    Roll,
    Bank,
}

/// Derive the turn-points target for `me` at turn start.
///
/// `scores` is the ordered roster of active seats with their banked
/// totals, including `me`.
#[must_use]
pub fn derive_target(
    me: PlayerId,
    scores: &[(PlayerId, u32)],
    config: &GameConfig,
    rng: &mut GameRng,
) -> u32 {
    let target = rng.gen_range(10..26);

    let my_score = scores
        .iter()
        .find(|(id, _)| *id == me)
        .map_or(0, |(_, s)| *s);

    let max_opponent = scores
        .iter()
        .filter(|(id, _)| *id != me)
        .map(|(_, s)| *s)
        .max()
        .unwrap_or(0);

    if max_opponent >= config.target_score {
        // Someone already qualifies: aim for exactly enough to overtake.
        (max_opponent + 1).saturating_sub(my_score)
    } else if max_opponent + 20 >= config.target_score {
        // An opponent is closing in: only bank on an outright win.
        UNREACHABLE_TARGET
    } else {
        target
    }
}

/// Decide the next action for an automated seat.
///
/// `target` is the stored per-turn target; `None` falls back to
/// [`DEFAULT_TARGET`] (the target is ephemeral and absent right after a
/// reload).
#[must_use]
pub fn decide(
    turn: &TurnState,
    my_score: u32,
    target: Option<u32>,
    config: &GameConfig,
    rng: &mut GameRng,
) -> BotAction {
    let target = target.unwrap_or(DEFAULT_TARGET);

    // An immediate win is always taken. Banking needs points on the
    // table, so with zero turn points there is nothing to take yet.
    if turn.turn_points > 0 && my_score + turn.turn_points >= config.target_score {
        return BotAction::Bank;
    }

    // Never bank without having rolled.
    if turn.turn_points == 0 {
        return BotAction::Roll;
    }

    if turn.turn_points < target {
        return BotAction::Roll;
    }

    // Past the target: bank with a chance keyed to the remaining pool.
    let bank_chance = match turn.dice_count {
        1 => 0.55,
        2 => 0.30,
        3 => 0.10,
        _ => 0.02,
    };

    if rng.gen_bool(bank_chance) {
        BotAction::Bank
    } else {
        BotAction::Roll
    }
}
