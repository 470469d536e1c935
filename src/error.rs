//! Error types for the surfaces around the referee core.
//!
//! Invalid move text and bomb reuse are not errors: they come back as a
//! `Validation` with `valid == false`. The variants here cover misuse of a
//! session or tool interface, bad configuration and console I/O.

use thiserror::Error;

use crate::core::Move;

/// Errors raised by sessions, tools and the console loop.
#[derive(Debug, Error)]
pub enum RefereeError {
    /// A turn was attempted after the final round.
    #[error("game is already over")]
    GameOver,

    /// A move string given to a tool call did not name a move.
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    /// The opponent's move source proposed a move the rules forbid.
    #[error("opponent proposed an illegal move: {0}")]
    IllegalOpponentMove(Move),

    /// Configuration does not describe a playable game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input ended before the game did.
    #[error("input closed before the game finished")]
    InputClosed,

    /// Reading or writing the console failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for referee operations that can fail.
pub type RefereeResult<T> = Result<T, RefereeError>;
