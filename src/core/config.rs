//! Referee configuration.
//!
//! Games are configured once at startup. The rule set itself is fixed;
//! only the round count and the opponent's seed vary.

use serde::{Deserialize, Serialize};

use crate::error::RefereeError;

/// Number of rounds when nothing else is configured.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Largest playable round count. The round counter must still be able
/// to step past the final round.
pub const MAX_ROUNDS_LIMIT: u32 = u32::MAX - 1;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefereeConfig {
    /// Total rounds in the game. Must be in `1..=MAX_ROUNDS_LIMIT`.
    pub max_rounds: u32,

    /// Seed for the random opponent. `None` means seed from entropy.
    pub seed: Option<u64>,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }
}

impl RefereeConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Fix the opponent's seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), RefereeError> {
        if self.max_rounds == 0 {
            return Err(RefereeError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        if self.max_rounds > MAX_ROUNDS_LIMIT {
            return Err(RefereeError::InvalidConfig(format!(
                "max_rounds must be at most {MAX_ROUNDS_LIMIT}"
            )));
        }
        Ok(())
    }
}
