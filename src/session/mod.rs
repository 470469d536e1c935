//! Game sessions.
//!
//! A `Session` owns one game's state, its opponent and the turn history.
//! Independent sessions share nothing, so any number of games can run
//! side by side.

mod game;

pub use game::{Session, Turn};
