//! Move representation.
//!
//! A move is one of four enumerated values. Free-text input is normalized
//! (trimmed, lowercased) before it is matched, so `" BOMB "` parses as
//! `Move::Bomb` and `"rocks"` does not parse at all.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A single move submitted for a round.
///
/// ## Example
///
/// ```
/// use rps_plus::core::Move;
///
/// let m: Move = "  Paper ".parse().unwrap();
/// assert_eq!(m, Move::Paper);
/// assert!("lizard".parse::<Move>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
    /// Beats every non-bomb move. Usable once per player per game.
    Bomb,
}

impl Move {
    /// All four moves, in declaration order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three classic moves, which can be played any number of times.
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Lowercase name of the move.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Is this the bomb?
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// Classic rock-paper-scissors dominance.
    ///
    /// Only meaningful between standard moves; bomb handling lives in
    /// the referee's decision table.
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// Normalize free text and match it against the enumerated moves.
    #[must_use]
    pub fn normalize(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|m| m.as_str() == normalized)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input text did not name one of the four moves.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("not a move: {input:?}")]
pub struct ParseMoveError {
    /// The offending input, as given.
    pub input: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| ParseMoveError {
            input: s.to_string(),
        })
    }
}
