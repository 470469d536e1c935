//! Opponent move sources.
//!
//! The referee never rolls dice itself. A session asks a `MoveSource` for
//! the bot's move each round, so games can be driven by:
//! - `RandomMoves`: seeded uniform choice (the default bot)
//! - `ScriptedMoves`: a fixed sequence, for deterministic tests

pub mod source;

pub use source::{select_opponent_move, MoveSource, RandomMoves, ScriptedMoves};
