//! The round/turn state machine.
//!
//! `GameEngine` owns the whole mutable game: seats, turn order, round
//! counter, score ledger and RNG. It is driven synchronously — every
//! operation completes within the call, so a snapshot taken between any
//! two calls always captures a consistent state.
//!
//! ## Lifecycle
//!
//! `NotStarted -> Playing -> Finished`. Within `Playing`, one seat at a
//! time is current; `roll` and `bank` enforce that instead of any lock.
//! A round ends when every seat in the turn order has had a turn; at
//! round end the ledger decides whether someone won, a tie-break starts
//! (non-tied seats become spectators), or the next ordinary round begins.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::bot::{self, BotAction};
use crate::core::{GameConfig, GameRng, PlayerId, Seat, MAX_PLAYERS, MIN_PLAYERS};
use crate::dice::{self, RollOutcome};
use crate::error::{ActionError, ConfigError};
use crate::events::GameEvent;
use crate::score::{MemoryLedger, ScoreLedger};

/// Top-level game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    Playing,
    /// Terminal. The winner's final total stays in the ledger.
    Finished { winner: PlayerId },
}

/// Seat descriptor used at game creation.
#[derive(Clone, Debug)]
pub struct SeatConfig {
    pub name: String,
    pub is_automated: bool,
}

impl SeatConfig {
    /// A human-controlled seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_automated: false,
        }
    }

    /// A bot-controlled seat.
    pub fn bot(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_automated: true,
        }
    }
}

/// What a successful `roll` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollResult {
    pub outcome: RollOutcome,
    /// The roll busted; the turn ended with zero gain.
    pub busted: bool,
    /// The pool emptied and was refreshed to the starting dice count.
    pub refreshed: bool,
}

/// The complete game: state machine, seats, ledger and RNG.
#[derive(Debug)]
pub struct GameEngine {
    pub(crate) config: GameConfig,
    pub(crate) seats: Vec<Seat>,
    pub(crate) ledger: MemoryLedger,
    pub(crate) status: GameStatus,
    /// Completed-and-current round counter, 0 until the game starts.
    pub(crate) round: u32,
    /// Active seats in insertion order for the current round.
    pub(crate) turn_order: SmallVec<[PlayerId; 8]>,
    pub(crate) turn_index: usize,
    pub(crate) rng: GameRng,
    /// Current bot's per-turn target. Ephemeral: not part of snapshots,
    /// re-derived lazily on the first tick after a reload.
    bot_target: Option<u32>,
    /// Pending notifications. Ephemeral, drained by the host.
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a game. Validates configuration and roster before any
    /// state is constructed.
    pub fn new(
        config: GameConfig,
        roster: Vec<SeatConfig>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
            return Err(ConfigError::PlayerCountOutOfRange {
                got: roster.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let seats = roster
            .into_iter()
            .enumerate()
            .map(|(i, sc)| Seat::new(PlayerId::new(i as u8), sc.name, sc.is_automated))
            .collect::<Vec<_>>();
        let player_count = seats.len();

        Ok(Self {
            config,
            seats,
            ledger: MemoryLedger::new(player_count),
            status: GameStatus::NotStarted,
            round: 0,
            turn_order: SmallVec::new(),
            turn_index: 0,
            rng: GameRng::new(seed),
            bot_target: None,
            events: Vec::new(),
        })
    }

    /// Reassemble an engine from snapshot parts. Ephemeral state (bot
    /// target, pending events) starts empty and is rebuilt on use.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        config: GameConfig,
        seats: Vec<Seat>,
        ledger: MemoryLedger,
        status: GameStatus,
        round: u32,
        turn_order: SmallVec<[PlayerId; 8]>,
        turn_index: usize,
        rng: GameRng,
    ) -> Self {
        Self {
            config,
            seats,
            ledger,
            status,
            round,
            turn_order,
            turn_index,
            rng,
            bot_target: None,
            events: Vec::new(),
        }
    }

    /// Start play: round 1 begins and the first seat's turn starts.
    ///
    /// Does nothing if the game is already started.
    pub fn start(&mut self) {
        if self.status != GameStatus::NotStarted {
            debug!(status = ?self.status, "start ignored");
            return;
        }
        self.status = GameStatus::Playing;
        self.round = 0;
        info!(players = self.seats.len(), "game started");
        self.start_round();
    }

    // === Queries ===

    /// Table configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All seats in roster order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Look up a seat.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<&Seat> {
        self.seats.get(player.index())
    }

    /// The seat whose turn it is, if the game is in play.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.turn_order.get(self.turn_index).copied()
    }

    /// A player's banked total.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.ledger.score(player)
    }

    /// Read access to the ledger, for display.
    #[must_use]
    pub fn ledger(&self) -> &MemoryLedger {
        &self.ledger
    }

    /// Mutable ledger access for hosts that seed or migrate scores.
    /// The ledger only supports adding, so totals stay monotonic.
    pub fn ledger_mut(&mut self) -> &mut MemoryLedger {
        &mut self.ledger
    }

    /// Current round number (1-based once play begins).
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round
    }

    /// The winner, once the game has finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Whether the game has reached its terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    /// Take all pending notifications.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Actions ===

    /// Roll the current pool for `player`.
    ///
    /// Rejections leave the state untouched.
    pub fn roll(&mut self, player: PlayerId) -> Result<RollResult, ActionError> {
        self.check_turn(player)?;

        let dice_count = self.seats[player.index()].turn.dice_count;
        let outcome = dice::resolve(dice_count, self.config.variant, &mut self.rng);

        self.seats[player.index()].turn.last_roll = Some(outcome);
        self.events.push(GameEvent::Rolled { player, outcome });

        if outcome.is_bust(self.config.variant) {
            let lost = self.seats[player.index()].turn.turn_points;
            self.seats[player.index()].turn.turn_points = 0;
            debug!(%player, lost, "bust");
            self.events.push(GameEvent::Busted { player, lost });
            self.end_turn();
            return Ok(RollResult {
                outcome,
                busted: true,
                refreshed: false,
            });
        }

        let starting_dice = self.config.starting_dice;
        let turn = &mut self.seats[player.index()].turn;
        turn.turn_points += outcome.favorable;
        turn.dice_count = outcome.remaining();

        let refreshed = turn.dice_count == 0;
        if refreshed {
            // Cleared the whole pool: fresh dice, points carry over.
            turn.dice_count = starting_dice;
            self.events.push(GameEvent::FreshDice {
                player,
                count: starting_dice,
            });
        }

        Ok(RollResult {
            outcome,
            busted: false,
            refreshed,
        })
    }

    /// Bank the current turn's points for `player`, ending the turn.
    ///
    /// Returns the amount banked. Rejections leave the state untouched.
    pub fn bank(&mut self, player: PlayerId) -> Result<u32, ActionError> {
        self.check_turn(player)?;

        let amount = self.seats[player.index()].turn.turn_points;
        if amount == 0 {
            return Err(ActionError::NothingToBank(player));
        }

        self.ledger.add_score(player, amount);
        let total = self.ledger.score(player);
        self.seats[player.index()].turn.turn_points = 0;

        info!(%player, amount, total, "banked");
        self.events.push(GameEvent::Banked {
            player,
            amount,
            total,
        });
        self.end_turn();
        Ok(amount)
    }

    /// Advance the current automated seat by one policy evaluation.
    ///
    /// Does nothing when the game is not in play or the current seat is
    /// human, so hosts can tick unconditionally.
    pub fn on_tick(&mut self) {
        let Some(player) = self.current_player() else {
            return;
        };
        if !self.seats[player.index()].is_automated {
            return;
        }

        // The per-turn target is ephemeral; after a snapshot reload it
        // is re-derived here on first use.
        if self.bot_target.is_none() {
            self.bot_target = Some(self.derive_bot_target(player));
        }

        let turn = self.seats[player.index()].turn.clone();
        let my_score = self.ledger.score(player);
        let action = bot::decide(
            &turn,
            my_score,
            self.bot_target,
            &self.config,
            &mut self.rng,
        );

        // The policy only proposes actions that pass the preconditions.
        let result = match action {
            BotAction::Roll => self.roll(player).map(|_| ()),
            BotAction::Bank => self.bank(player).map(|_| ()),
        };
        if let Err(err) = result {
            debug!(%player, %err, "bot action rejected");
        }
    }

    // === Turn/round internals ===

    fn check_turn(&self, player: PlayerId) -> Result<(), ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::NotPlaying);
        }
        let seat = self
            .seats
            .get(player.index())
            .ok_or(ActionError::UnknownPlayer(player))?;
        if seat.is_spectator {
            return Err(ActionError::Spectator(player));
        }
        if self.current_player() != Some(player) {
            return Err(ActionError::NotYourTurn(player));
        }
        Ok(())
    }

    fn active_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| !s.is_spectator)
    }

    fn derive_bot_target(&mut self, player: PlayerId) -> u32 {
        let scores: Vec<(PlayerId, u32)> = self
            .active_seats()
            .map(|s| (s.id, self.ledger.score(s.id)))
            .collect();
        bot::derive_target(player, &scores, &self.config, &mut self.rng)
    }

    fn start_round(&mut self) {
        self.round += 1;
        // Recompute the order each round: tie-breaks shrink the active set.
        let order: SmallVec<[PlayerId; 8]> = self.active_seats().map(|s| s.id).collect();
        self.turn_order = order;
        self.turn_index = 0;

        debug!(round = self.round, seats = self.turn_order.len(), "round started");
        self.events.push(GameEvent::RoundStarted { round: self.round });
        self.start_turn();
    }

    fn start_turn(&mut self) {
        let Some(player) = self.current_player() else {
            return;
        };

        let starting_dice = self.config.starting_dice;
        self.seats[player.index()].turn.reset(starting_dice);

        let score = self.ledger.score(player);
        self.events.push(GameEvent::TurnStarted { player, score });

        self.bot_target = if self.seats[player.index()].is_automated {
            Some(self.derive_bot_target(player))
        } else {
            None
        };
    }

    fn end_turn(&mut self) {
        self.bot_target = None;
        self.turn_index += 1;
        if self.turn_index >= self.turn_order.len() {
            self.end_round();
        } else {
            self.start_turn();
        }
    }

    fn end_round(&mut self) {
        // Qualifiers: active seats at or above the target score.
        let mut high_score = 0;
        let mut leaders: Vec<PlayerId> = Vec::new();
        for seat in self.active_seats() {
            let score = self.ledger.score(seat.id);
            if score < self.config.target_score {
                continue;
            }
            if score > high_score {
                high_score = score;
                leaders = vec![seat.id];
            } else if score == high_score {
                leaders.push(seat.id);
            }
        }

        match leaders.as_slice() {
            [] => self.start_round(),
            [winner] => {
                let winner = *winner;
                info!(%winner, score = high_score, "game over");
                self.events.push(GameEvent::GameOver {
                    winner,
                    score: high_score,
                });
                self.status = GameStatus::Finished { winner };
            }
            tied => {
                // Tie-break: only the tied seats keep playing, in their
                // original relative order. Spectators never return.
                let tied = tied.to_vec();
                info!(?tied, score = high_score, "tie-break round");
                for seat in &mut self.seats {
                    if !seat.is_spectator && !tied.contains(&seat.id) {
                        seat.is_spectator = true;
                    }
                }
                self.events.push(GameEvent::TieBreak {
                    players: tied,
                });
                self.start_round();
            }
        }
    }
}
