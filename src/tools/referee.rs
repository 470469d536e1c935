//! `RefereeTools` trait and its state-owning implementation.

use serde::Serialize;

use crate::core::{GameState, Move};
use crate::error::{RefereeError, RefereeResult};
use crate::rules::{self, RoundOutcome, Validation};

/// Outcome of a `resolve_round` tool call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// Who took the round.
    pub round_winner: RoundOutcome,
    /// State after the round.
    pub state: GameState,
}

/// The three operations a host can invoke.
///
/// Implementations own their game state; callers never pass it in.
pub trait RefereeTools {
    /// Check a user move without changing anything.
    fn validate_move(&self, input: &str) -> Validation;

    /// Resolve a round from already-validated move strings.
    fn resolve_round(&mut self, user_move: &str, bot_move: &str) -> RefereeResult<RoundReport>;

    /// Consume a round for rejected input and return the new state.
    fn handle_invalid_input(&mut self) -> RefereeResult<GameState>;
}

/// Default `RefereeTools` implementation over one owned `GameState`.
#[derive(Clone, Debug, Default)]
pub struct Referee {
    state: GameState,
}

impl Referee {
    /// Referee for a game of `max_rounds` rounds.
    #[must_use]
    pub fn new(max_rounds: u32) -> Self {
        Self::from_state(GameState::new(max_rounds))
    }

    /// Resume from an existing state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Give up ownership of the state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    fn ensure_running(&mut self) -> RefereeResult<()> {
        if rules::is_game_over(&mut self.state) {
            return Err(RefereeError::GameOver);
        }
        Ok(())
    }
}

fn parse_move(input: &str) -> RefereeResult<Move> {
    input
        .parse()
        .map_err(|_| RefereeError::InvalidMove(input.to_string()))
}

impl RefereeTools for Referee {
    fn validate_move(&self, input: &str) -> Validation {
        rules::validate(input, &self.state)
    }

    fn resolve_round(&mut self, user_move: &str, bot_move: &str) -> RefereeResult<RoundReport> {
        self.ensure_running()?;
        let user_move = parse_move(user_move)?;
        let bot_move = parse_move(bot_move)?;

        let round_winner = rules::resolve_round(user_move, bot_move, &mut self.state);
        Ok(RoundReport {
            round_winner,
            state: self.state.clone(),
        })
    }

    fn handle_invalid_input(&mut self) -> RefereeResult<GameState> {
        self.ensure_running()?;
        rules::consume_invalid_turn(&mut self.state);
        Ok(self.state.clone())
    }
}
