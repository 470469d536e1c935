//! Game state: the single record a referee mutates.
//!
//! ## Lifecycle
//!
//! A `GameState` is created once per game, mutated in place by every turn
//! (valid or not) and is effectively frozen once `game_over` is set.
//! There is no global instance; every game owns its own record.
//!
//! ## Invariants
//!
//! - `round` starts at 1 and advances by exactly 1 per turn
//! - bomb flags only ever go from `false` to `true`
//! - `game_over == (round > max_rounds)` after any recomputation

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_MAX_ROUNDS;
use super::player::Player;

/// Coarse phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Rounds remain to be played.
    InProgress,
    /// All rounds consumed. Terminal.
    GameOver,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current round number (starts at 1).
    pub round: u32,

    /// Total rounds in the game.
    pub max_rounds: u32,

    /// Decisive rounds won by the user.
    pub user_score: u32,

    /// Decisive rounds won by the bot.
    pub bot_score: u32,

    /// Has the user resolved a round with a bomb?
    pub user_bomb_used: bool,

    /// Has the bot resolved a round with a bomb?
    pub bot_bomb_used: bool,

    /// Set once `round` exceeds `max_rounds`; never cleared.
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

impl GameState {
    /// Create a fresh state for a game of `max_rounds` rounds.
    ///
    /// A zero-round game is terminal from the start.
    #[must_use]
    pub fn new(max_rounds: u32) -> Self {
        Self {
            round: 1,
            max_rounds,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: 1 > max_rounds,
        }
    }

    /// Score for one side.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::User => self.user_score,
            Player::Bot => self.bot_score,
        }
    }

    /// Has this side spent its bomb?
    #[must_use]
    pub fn bomb_used(&self, player: Player) -> bool {
        match player {
            Player::User => self.user_bomb_used,
            Player::Bot => self.bot_bomb_used,
        }
    }

    /// Current phase, derived from the stored flag.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::InProgress
        }
    }

    pub(crate) fn award_point(&mut self, player: Player) {
        match player {
            Player::User => self.user_score += 1,
            Player::Bot => self.bot_score += 1,
        }
    }

    pub(crate) fn mark_bomb_used(&mut self, player: Player) {
        match player {
            Player::User => self.user_bomb_used = true,
            Player::Bot => self.bot_bomb_used = true,
        }
    }

    /// Consume the current round and recompute `game_over`.
    ///
    /// Saturates at `u32::MAX` so the counter can never wrap backwards.
    pub(crate) fn advance_round(&mut self) {
        self.round = self.round.saturating_add(1);
        self.refresh_game_over();
    }

    /// Recompute `game_over` from the round counter.
    ///
    /// Never clears a flag that is already set.
    pub(crate) fn refresh_game_over(&mut self) -> bool {
        if self.round > self.max_rounds {
            self.game_over = true;
        }
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(3);
        assert_eq!(state.round, 1);
        assert_eq!(state.max_rounds, 3);
        assert_eq!(state.user_score, 0);
        assert_eq!(state.bot_score, 0);
        assert!(!state.user_bomb_used);
        assert!(!state.bot_bomb_used);
        assert!(!state.game_over);
        assert_eq!(state.phase(), Phase::InProgress);
    }

    #[test]
    fn test_default_is_three_rounds() {
        assert_eq!(GameState::default(), GameState::new(3));
    }

    #[test]
    fn test_zero_round_game_is_terminal() {
        let state = GameState::new(0);
        assert!(state.game_over);
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn test_advance_round_flips_game_over() {
        let mut state = GameState::new(2);

        state.advance_round();
        assert_eq!(state.round, 2);
        assert!(!state.game_over);

        state.advance_round();
        assert_eq!(state.round, 3);
        assert!(state.game_over);
    }

    #[test]
    fn test_advance_round_saturates_at_counter_limit() {
        let mut state = GameState::new(u32::MAX);
        state.round = u32::MAX;

        state.advance_round();
        assert_eq!(state.round, u32::MAX);

        state.advance_round();
        assert_eq!(state.round, u32::MAX);
        assert!(!state.game_over);
    }

    #[test]
    fn test_per_player_accessors() {
        let mut state = GameState::new(3);
        state.award_point(Player::Bot);
        state.mark_bomb_used(Player::User);

        assert_eq!(state.score(Player::User), 0);
        assert_eq!(state.score(Player::Bot), 1);
        assert!(state.bomb_used(Player::User));
        assert!(!state.bomb_used(Player::Bot));
    }

    #[test]
    fn test_serde_field_names() {
        let state = GameState::new(3);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["round"], 1);
        assert_eq!(json["max_rounds"], 3);
        assert_eq!(json["user_score"], 0);
        assert_eq!(json["bot_bomb_used"], false);
        assert_eq!(json["game_over"], false);

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
