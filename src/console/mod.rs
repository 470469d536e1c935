//! Console front end.
//!
//! `run_console` drives a `Session` from any line-based reader and writes
//! the game transcript to any writer. The binary wires it to stdin and
//! stdout; tests wire it to in-memory buffers.

mod transcript;

pub use transcript::{run_console, ConsoleOptions};
