//! Session implementation.

use serde::Serialize;

use crate::core::{GameState, Move, Player, RefereeConfig};
use crate::error::{RefereeError, RefereeResult};
use crate::opponent::{MoveSource, RandomMoves};
use crate::rules::{self, FinalResult, RoundOutcome, ValidationReason};

/// Record of one processed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Turn {
    /// Input failed validation; the round was consumed with no effect.
    Rejected {
        /// Round the input was submitted in.
        round: u32,
        /// Raw input as typed.
        input: String,
        /// Why it was rejected.
        reason: ValidationReason,
    },
    /// Both moves were played and the round decided.
    Resolved {
        /// Round that was resolved.
        round: u32,
        /// Raw input as typed.
        input: String,
        /// The user's parsed move.
        user_move: Move,
        /// The bot's move.
        bot_move: Move,
        /// Who took the round.
        outcome: RoundOutcome,
    },
}

impl Turn {
    /// Round this turn was played in.
    #[must_use]
    pub fn round(&self) -> u32 {
        match self {
            Turn::Rejected { round, .. } | Turn::Resolved { round, .. } => *round,
        }
    }

    /// Round outcome, if the turn was resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self {
            Turn::Rejected { .. } => None,
            Turn::Resolved { outcome, .. } => Some(*outcome),
        }
    }
}

/// One game between the user and a move source.
#[derive(Debug)]
pub struct Session<S: MoveSource> {
    state: GameState,
    opponent: S,
    history: Vec<Turn>,
}

impl Session<RandomMoves> {
    /// Session against the random bot, seeded from `config.seed`.
    pub fn random(config: &RefereeConfig) -> RefereeResult<Self> {
        Self::new(config, RandomMoves::from_seed(config.seed))
    }
}

impl<S: MoveSource> Session<S> {
    /// Create a session after validating the configuration.
    pub fn new(config: &RefereeConfig, opponent: S) -> RefereeResult<Self> {
        config.validate()?;
        log::debug!("new session: {} rounds", config.max_rounds);
        Ok(Self {
            state: GameState::new(config.max_rounds),
            opponent,
            history: Vec::new(),
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every turn processed so far, in order.
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The opponent driving the bot.
    #[must_use]
    pub fn opponent(&self) -> &S {
        &self.opponent
    }

    /// Has the last round been consumed?
    pub fn is_over(&mut self) -> bool {
        rules::is_game_over(&mut self.state)
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn final_result(&self) -> Option<FinalResult> {
        self.state.game_over.then(|| rules::final_result(&self.state))
    }

    /// Process one user turn.
    ///
    /// Invalid input is not an error: it consumes the round and comes
    /// back as `Turn::Rejected`. Errors are reserved for turns that must
    /// not happen at all, and leave the state untouched.
    pub fn play_turn(&mut self, input: &str) -> RefereeResult<Turn> {
        if self.is_over() {
            log::warn!("turn refused: game already over");
            return Err(RefereeError::GameOver);
        }

        let round = self.state.round;
        let validation = rules::validate(input, &self.state);

        let turn = match validation.parsed {
            Some(user_move) => {
                let bot_move = self.opponent.next_move(&self.state);
                if !rules::is_legal(Player::Bot, bot_move, &self.state) {
                    log::warn!("opponent proposed {bot_move} after its bomb was spent");
                    return Err(RefereeError::IllegalOpponentMove(bot_move));
                }
                let outcome = rules::resolve_round(user_move, bot_move, &mut self.state);
                Turn::Resolved {
                    round,
                    input: input.to_string(),
                    user_move,
                    bot_move,
                    outcome,
                }
            }
            None => {
                rules::consume_invalid_turn(&mut self.state);
                Turn::Rejected {
                    round,
                    input: input.to_string(),
                    reason: validation.reason,
                }
            }
        };

        self.history.push(turn.clone());
        Ok(turn)
    }
}
