//! Interactive loop and transcript formatting.

use std::io::{BufRead, Write};

use crate::core::GameState;
use crate::error::{RefereeError, RefereeResult};
use crate::opponent::MoveSource;
use crate::rules::{self, FinalResult, RoundOutcome};
use crate::session::{Session, Turn};

/// Console presentation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Reproduce the legacy transcript exactly, which prints nothing
    /// when the bot takes a round.
    pub legacy_transcript: bool,
}

impl ConsoleOptions {
    /// Default options: every round outcome is announced.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle legacy transcript parity.
    #[must_use]
    pub fn with_legacy_transcript(mut self, legacy: bool) -> Self {
        self.legacy_transcript = legacy;
        self
    }
}

/// Play a full game, reading one move per line.
///
/// Returns the final result once the last round is consumed, or
/// `RefereeError::InputClosed` if the reader runs dry first.
pub fn run_console<S, R, W>(
    session: &mut Session<S>,
    mut input: R,
    mut out: W,
    options: ConsoleOptions,
) -> RefereeResult<FinalResult>
where
    S: MoveSource,
    R: BufRead,
    W: Write,
{
    write_banner(&mut out, session.state())?;

    let mut line = String::new();
    while !session.is_over() {
        write!(out, "Round {} - Enter your move: ", session.state().round)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(RefereeError::InputClosed);
        }
        let submitted = line.trim_end_matches(&['\n', '\r'][..]);

        let turn = session.play_turn(submitted)?;
        write_turn(&mut out, &turn, session.state(), options)?;
    }

    let result = rules::final_result(session.state());
    let state = session.state();
    writeln!(out)?;
    writeln!(out, "Game Over!")?;
    writeln!(
        out,
        "Final score → You: {} | Bot: {}",
        state.user_score, state.bot_score
    )?;
    writeln!(out, "Result: {result}")?;
    out.flush()?;
    Ok(result)
}

fn write_banner<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    writeln!(out, "Welcome to Rock-Paper-Scissors-Plus!")?;
    writeln!(out, "Rules:")?;
    writeln!(out, "- Best of {} rounds", state.max_rounds)?;
    writeln!(out, "- Moves: rock, paper, scissors, bomb (once per player)")?;
    writeln!(out, "- Bomb beats all moves; bomb vs bomb is a draw")?;
    writeln!(out, "- Invalid input still consumes the round")?;
    writeln!(out)
}

fn write_turn<W: Write>(
    out: &mut W,
    turn: &Turn,
    state: &GameState,
    options: ConsoleOptions,
) -> std::io::Result<()> {
    match turn {
        Turn::Rejected { reason, .. } => {
            writeln!(out, "Invalid move ({reason}). Round wasted.")
        }
        Turn::Resolved {
            input,
            bot_move,
            outcome,
            ..
        } => {
            writeln!(out, "You played: {input}")?;
            writeln!(out, "Bot played: {bot_move}")?;
            match outcome {
                RoundOutcome::Draw => writeln!(out, "Round result: Draw")?,
                RoundOutcome::User => writeln!(out, "Round result: You win this round")?,
                RoundOutcome::Bot if !options.legacy_transcript => {
                    writeln!(out, "Round result: Bot wins this round")?;
                }
                RoundOutcome::Bot => {}
            }
            writeln!(
                out,
                "Current score → You: {} | Bot: {}",
                state.user_score, state.bot_score
            )
        }
    }
}
