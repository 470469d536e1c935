//! Console transcript tests.
//!
//! The loop runs against in-memory input and output buffers.

use std::io::Cursor;

use rps_plus::console::{run_console, ConsoleOptions};
use rps_plus::core::{Move, RefereeConfig};
use rps_plus::opponent::ScriptedMoves;
use rps_plus::rules::FinalResult;
use rps_plus::session::Session;
use rps_plus::RefereeError;

fn play(
    input: &str,
    bot: &[Move],
    options: ConsoleOptions,
) -> (Result<FinalResult, RefereeError>, String) {
    let mut session =
        Session::new(&RefereeConfig::new(), ScriptedMoves::new(bot.iter().copied())).unwrap();
    let mut out = Vec::new();
    let result = run_console(&mut session, Cursor::new(input.as_bytes()), &mut out, options);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_full_transcript() {
    let (result, out) = play(
        "Rock\nlizard\nbomb\n",
        &[Move::Scissors, Move::Paper],
        ConsoleOptions::new(),
    );

    assert_eq!(result.unwrap(), FinalResult::UserWins);

    let expected = "\
Welcome to Rock-Paper-Scissors-Plus!
Rules:
- Best of 3 rounds
- Moves: rock, paper, scissors, bomb (once per player)
- Bomb beats all moves; bomb vs bomb is a draw
- Invalid input still consumes the round

Round 1 - Enter your move: You played: Rock
Bot played: scissors
Round result: You win this round
Current score → You: 1 | Bot: 0
Round 2 - Enter your move: Invalid move (Invalid move). Round wasted.
Round 3 - Enter your move: You played: bomb
Bot played: paper
Round result: You win this round
Current score → You: 2 | Bot: 0

Game Over!
Final score → You: 2 | Bot: 0
Result: User wins
";
    assert_eq!(out, expected);
}

#[test]
fn test_bot_win_announced_by_default() {
    let (result, out) = play("scissors\nscissors\nscissors\n", &[], ConsoleOptions::new());

    assert_eq!(result.unwrap(), FinalResult::BotWins);
    assert_eq!(out.matches("Round result: Bot wins this round").count(), 3);
    assert!(out.ends_with("Result: Bot wins\n"));
}

#[test]
fn test_legacy_transcript_silent_on_bot_win() {
    let options = ConsoleOptions::new().with_legacy_transcript(true);
    let (result, out) = play("scissors\nrock\npaper\n", &[], options);

    assert_eq!(result.unwrap(), FinalResult::Draw);
    assert!(!out.contains("Bot wins this round"));
    assert_eq!(out.matches("Round result: Draw").count(), 1);
    assert_eq!(out.matches("Round result: You win this round").count(), 1);
    assert_eq!(out.matches("Current score").count(), 3);
}

#[test]
fn test_bomb_reuse_message() {
    let (result, out) = play("bomb\n BOMB\nrock\n", &[], ConsoleOptions::new());

    assert_eq!(result.unwrap(), FinalResult::UserWins);
    assert!(out.contains("Invalid move (Bomb already used). Round wasted."));
}

#[test]
fn test_crlf_input() {
    let (result, out) = play("paper\r\npaper\r\npaper\r\n", &[], ConsoleOptions::new());

    assert_eq!(result.unwrap(), FinalResult::UserWins);
    assert!(out.contains("You played: paper\nBot played: rock\n"));
}

#[test]
fn test_input_closed_early() {
    let (result, out) = play("rock\n", &[], ConsoleOptions::new());

    assert!(matches!(result, Err(RefereeError::InputClosed)));
    assert!(out.ends_with("Round 2 - Enter your move: "));
}

#[test]
fn test_extra_input_ignored() {
    let (result, out) = play("paper\npaper\npaper\nrock\nrock\n", &[], ConsoleOptions::new());

    assert_eq!(result.unwrap(), FinalResult::UserWins);
    assert!(!out.contains("Round 4"));
}
