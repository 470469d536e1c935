//! Core referee types: players, moves, state, RNG, configuration.
//!
//! These are the building blocks every other module operates on. None of
//! them hold global state; a game is just a `GameState` value.

pub mod player;
pub mod action;
pub mod state;
pub mod rng;
pub mod config;

pub use player::Player;
pub use action::{Move, ParseMoveError};
pub use state::{GameState, Phase};
pub use rng::GameRng;
pub use config::{RefereeConfig, DEFAULT_MAX_ROUNDS, MAX_ROUNDS_LIMIT};
