//! # rps-plus
//!
//! A referee for Rock-Paper-Scissors-Plus: a fixed-round game where each
//! player may also play a single `bomb` that beats every other move.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A game is a `GameState` value, created per game
//!    and passed to the referee. There is no global record.
//!
//! 2. **Injected Randomness**: The bot's moves come from a `MoveSource`,
//!    so every game can be replayed deterministically in tests.
//!
//! 3. **Invalid Input Is Not an Error**: A bad move is a `Validation`
//!    with `valid == false` and costs the round. `RefereeError` is kept
//!    for misuse (playing after game over) and I/O.
//!
//! ## Modules
//!
//! - `core`: Players, moves, state, RNG, configuration
//! - `rules`: The round-resolution state machine
//! - `opponent`: Move sources for the bot
//! - `session`: One game with its opponent and history
//! - `tools`: Three-call interface for host orchestrators
//! - `console`: Line-based interactive loop
//!
//! ## Example
//!
//! ```
//! use rps_plus::core::{Move, RefereeConfig};
//! use rps_plus::opponent::ScriptedMoves;
//! use rps_plus::rules::FinalResult;
//! use rps_plus::session::Session;
//!
//! let bot = ScriptedMoves::new([Move::Scissors, Move::Rock, Move::Paper]);
//! let mut session = Session::new(&RefereeConfig::new(), bot).unwrap();
//!
//! session.play_turn("rock").unwrap();
//! session.play_turn("bomb").unwrap();
//! session.play_turn("scissors").unwrap();
//!
//! assert_eq!(session.final_result(), Some(FinalResult::UserWins));
//! ```

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;
pub mod tools;
pub mod console;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameRng, GameState, Move, ParseMoveError, Phase, Player, RefereeConfig};

pub use crate::error::{RefereeError, RefereeResult};

pub use crate::rules::{FinalResult, RoundOutcome, Validation, ValidationReason};

pub use crate::opponent::{MoveSource, RandomMoves, ScriptedMoves};

pub use crate::session::{Session, Turn};

pub use crate::tools::{Referee, RefereeTools, RoundReport};

pub use crate::console::{run_console, ConsoleOptions};
