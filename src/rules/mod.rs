//! Round resolution and game termination.
//!
//! The referee never owns state: callers construct a `GameState` and
//! pass it to these functions. Sessions and tool shims are built on top.

pub mod engine;

pub use engine::{
    consume_invalid_turn, final_result, is_game_over, is_legal, resolve_round, round_winner,
    validate, validate_for, FinalResult, RoundOutcome, Validation, ValidationReason,
};
