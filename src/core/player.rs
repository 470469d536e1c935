//! Player identification.
//!
//! A referee game always has exactly two sides: the human `User` and the
//! `Bot` opponent. Everything that is tracked per side (score, bomb flag)
//! is addressed through `Player`.

use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The human submitting free-text moves.
    User,
    /// The opponent whose moves come from a `MoveSource`.
    Bot,
}

impl Player {
    /// Both players, user first.
    pub const ALL: [Player; 2] = [Player::User, Player::Bot];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::User => Player::Bot,
            Player::Bot => Player::User,
        }
    }

    /// Lowercase tag, as used in serialized outcomes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Player::User => "user",
            Player::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::User.opponent(), Player::Bot);
        assert_eq!(Player::Bot.opponent(), Player::User);
        assert_eq!(Player::User.opponent().opponent(), Player::User);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::User), "user");
        assert_eq!(format!("{}", Player::Bot), "bot");
    }

    #[test]
    fn test_all() {
        assert_eq!(Player::ALL.len(), 2);
        assert_eq!(Player::ALL[0], Player::User);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Player::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::Bot);
    }
}
