//! The referee state machine.
//!
//! Every operation here is a plain function over an explicitly passed
//! `GameState`:
//! - `validate` / `validate_for`: check a free-text move, no side effects
//! - `resolve_round`: decide a round, update scores, bomb flags, round
//! - `consume_invalid_turn`: burn a round for rejected input
//! - `is_game_over`, `final_result`: termination and outcome
//!
//! ## Decision table
//!
//! | user      | bot   | winner |
//! |-----------|-------|--------|
//! | bomb      | bomb  | draw   |
//! | bomb      | other | user   |
//! | other     | bomb  | bot    |
//! | x         | x     | draw   |
//! | x beats y | y     | user   |
//! | otherwise |       | bot    |

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, Player};

/// Winner of a single resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    /// The user took the round.
    User,
    /// The bot took the round.
    Bot,
    /// Nobody scores.
    Draw,
}

impl RoundOutcome {
    /// The player who scored, if the round was decisive.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::User => Some(Player::User),
            RoundOutcome::Bot => Some(Player::Bot),
            RoundOutcome::Draw => None,
        }
    }

    /// Is this a decisive (scoring) round?
    #[must_use]
    pub fn is_decisive(self) -> bool {
        self != RoundOutcome::Draw
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::User => f.write_str("user"),
            RoundOutcome::Bot => f.write_str("bot"),
            RoundOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalResult {
    /// User finished with the higher score.
    #[serde(rename = "User wins")]
    UserWins,
    /// Bot finished with the higher score.
    #[serde(rename = "Bot wins")]
    BotWins,
    /// Scores are level.
    #[serde(rename = "Draw")]
    Draw,
}

impl FinalResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        matches!(
            (self, player),
            (FinalResult::UserWins, Player::User) | (FinalResult::BotWins, Player::Bot)
        )
    }
}

impl std::fmt::Display for FinalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinalResult::UserWins => f.write_str("User wins"),
            FinalResult::BotWins => f.write_str("Bot wins"),
            FinalResult::Draw => f.write_str("Draw"),
        }
    }
}

/// Why a move was accepted or rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationReason {
    /// One of the four moves, and legal right now.
    #[serde(rename = "Valid move")]
    Valid,
    /// Not one of the four moves.
    #[serde(rename = "Invalid move")]
    InvalidMove,
    /// Bomb submitted by a player who already spent theirs.
    #[serde(rename = "Bomb already used")]
    BombAlreadyUsed,
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationReason::Valid => f.write_str("Valid move"),
            ValidationReason::InvalidMove => f.write_str("Invalid move"),
            ValidationReason::BombAlreadyUsed => f.write_str("Bomb already used"),
        }
    }
}

/// Verdict on a submitted move.
///
/// Serializes as `{"valid": bool, "reason": "..."}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// Can this move be resolved?
    pub valid: bool,

    /// Human-readable reason.
    pub reason: ValidationReason,

    /// The parsed move, present whenever `valid` is true.
    #[serde(skip)]
    pub parsed: Option<Move>,
}

impl Validation {
    fn accept(mv: Move) -> Self {
        Self {
            valid: true,
            reason: ValidationReason::Valid,
            parsed: Some(mv),
        }
    }

    fn reject(reason: ValidationReason) -> Self {
        Self {
            valid: false,
            reason,
            parsed: None,
        }
    }
}

/// Validate a user move against the current state.
///
/// ```
/// use rps_plus::core::GameState;
/// use rps_plus::rules::{validate, ValidationReason};
///
/// let mut state = GameState::new(3);
/// state.user_bomb_used = true;
///
/// let v = validate("BOMB ", &state);
/// assert!(!v.valid);
/// assert_eq!(v.reason, ValidationReason::BombAlreadyUsed);
/// ```
#[must_use]
pub fn validate(input: &str, state: &GameState) -> Validation {
    validate_for(Player::User, input, state)
}

/// Validate a move submitted by either player.
#[must_use]
pub fn validate_for(player: Player, input: &str, state: &GameState) -> Validation {
    match Move::normalize(input) {
        None => Validation::reject(ValidationReason::InvalidMove),
        Some(Move::Bomb) if state.bomb_used(player) => {
            Validation::reject(ValidationReason::BombAlreadyUsed)
        }
        Some(mv) => Validation::accept(mv),
    }
}

/// Can `player` legally play `mv` in this state?
#[must_use]
pub fn is_legal(player: Player, mv: Move, state: &GameState) -> bool {
    !(mv.is_bomb() && state.bomb_used(player))
}

/// The pure decision table: who wins `user_move` against `bot_move`.
#[must_use]
pub fn round_winner(user_move: Move, bot_move: Move) -> RoundOutcome {
    match (user_move, bot_move) {
        (Move::Bomb, Move::Bomb) => RoundOutcome::Draw,
        (Move::Bomb, _) => RoundOutcome::User,
        (_, Move::Bomb) => RoundOutcome::Bot,
        (u, b) if u == b => RoundOutcome::Draw,
        (u, b) if u.beats(b) => RoundOutcome::User,
        _ => RoundOutcome::Bot,
    }
}

/// Resolve one round in place.
///
/// Both moves must already be validated; this function does not check
/// bomb reuse or whether the game is over.
pub fn resolve_round(user_move: Move, bot_move: Move, state: &mut GameState) -> RoundOutcome {
    for (player, mv) in [(Player::User, user_move), (Player::Bot, bot_move)] {
        if mv.is_bomb() {
            state.mark_bomb_used(player);
        }
    }

    let outcome = round_winner(user_move, bot_move);
    if let Some(player) = outcome.winner() {
        state.award_point(player);
    }

    log::debug!(
        "round {}: user {} vs bot {} -> {}",
        state.round,
        user_move,
        bot_move,
        outcome
    );

    state.advance_round();
    log_if_finished(state);
    outcome
}

/// Burn a round for rejected input.
///
/// No scores or bomb flags change.
pub fn consume_invalid_turn(state: &mut GameState) {
    log::debug!("round {}: invalid input, round consumed", state.round);
    state.advance_round();
    log_if_finished(state);
}

/// Recompute, store and return whether the game is over.
pub fn is_game_over(state: &mut GameState) -> bool {
    state.refresh_game_over()
}

/// Compare final scores.
#[must_use]
pub fn final_result(state: &GameState) -> FinalResult {
    match state.user_score.cmp(&state.bot_score) {
        std::cmp::Ordering::Greater => FinalResult::UserWins,
        std::cmp::Ordering::Less => FinalResult::BotWins,
        std::cmp::Ordering::Equal => FinalResult::Draw,
    }
}

fn log_if_finished(state: &GameState) {
    if state.game_over {
        log::info!(
            "game over after {} rounds: user {} bot {} ({})",
            state.max_rounds,
            state.user_score,
            state.bot_score,
            final_result(state)
        );
    }
}
