//! Property-based tests for the referee state machine.

use proptest::prelude::*;

use rps_plus::core::{GameState, Move, RefereeConfig};
use rps_plus::opponent::RandomMoves;
use rps_plus::rules::{self, RoundOutcome};
use rps_plus::session::Session;

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

/// Mix of valid moves in odd spellings and outright junk.
fn any_input() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec!["rock", "Paper", " SCISSORS ", "bomb", "Bomb\t"])
            .prop_map(|s| s.to_string()),
        1 => "[a-z ]{0,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every turn advances the round by exactly one.
    #[test]
    fn prop_round_advances_by_one(
        inputs in prop::collection::vec(any_input(), 1..20),
        seed in any::<u64>(),
    ) {
        let config = RefereeConfig::new().with_max_rounds(inputs.len() as u32);
        let mut session = Session::new(&config, RandomMoves::new(seed)).unwrap();

        for input in &inputs {
            let before = session.state().round;
            session.play_turn(input).unwrap();
            prop_assert_eq!(session.state().round, before + 1);
        }
        prop_assert!(session.is_over());
    }

    /// `game_over` always mirrors `round > max_rounds`.
    #[test]
    fn prop_game_over_tracks_round(
        max_rounds in 1u32..8,
        inputs in prop::collection::vec(any_input(), 0..12),
        seed in any::<u64>(),
    ) {
        let config = RefereeConfig::new().with_max_rounds(max_rounds);
        let mut session = Session::new(&config, RandomMoves::new(seed)).unwrap();

        for input in &inputs {
            if session.play_turn(input).is_err() {
                prop_assert!(session.state().game_over);
                break;
            }
            let state = session.state();
            prop_assert_eq!(state.game_over, state.round > state.max_rounds);
        }
    }

    /// Bomb flags never reset once set.
    #[test]
    fn prop_bomb_flags_monotonic(
        inputs in prop::collection::vec(any_input(), 1..15),
        seed in any::<u64>(),
    ) {
        let config = RefereeConfig::new().with_max_rounds(inputs.len() as u32);
        let mut session = Session::new(&config, RandomMoves::new(seed)).unwrap();

        let (mut user, mut bot) = (false, false);
        for input in &inputs {
            session.play_turn(input).unwrap();
            let state = session.state();
            prop_assert!(state.user_bomb_used || !user);
            prop_assert!(state.bot_bomb_used || !bot);
            user = state.user_bomb_used;
            bot = state.bot_bomb_used;
        }
    }

    /// Only decisive rounds move the score, and by exactly one.
    #[test]
    fn prop_scores_follow_outcome(user_move in any_move(), bot_move in any_move()) {
        let mut state = GameState::new(3);
        let outcome = rules::resolve_round(user_move, bot_move, &mut state);

        match outcome {
            RoundOutcome::User => prop_assert_eq!((state.user_score, state.bot_score), (1, 0)),
            RoundOutcome::Bot => prop_assert_eq!((state.user_score, state.bot_score), (0, 1)),
            RoundOutcome::Draw => prop_assert_eq!((state.user_score, state.bot_score), (0, 0)),
        }
        prop_assert_eq!(outcome.is_decisive(), outcome.winner().is_some());
        prop_assert_eq!(state.user_bomb_used, user_move == Move::Bomb);
        prop_assert_eq!(state.bot_bomb_used, bot_move == Move::Bomb);
    }

    /// Swapping sides swaps the winner.
    #[test]
    fn prop_decision_table_antisymmetric(a in any_move(), b in any_move()) {
        let forward = rules::round_winner(a, b);
        let reverse = rules::round_winner(b, a);
        let expected = match forward {
            RoundOutcome::User => RoundOutcome::Bot,
            RoundOutcome::Bot => RoundOutcome::User,
            RoundOutcome::Draw => RoundOutcome::Draw,
        };
        prop_assert_eq!(reverse, expected);
    }

    /// Invalid text never touches scores or bomb flags.
    #[test]
    fn prop_junk_input_only_costs_round(junk in "[a-z]{5,10}") {
        prop_assume!(junk.parse::<Move>().is_err());

        let mut state = GameState::new(3);
        let validation = rules::validate(&junk, &state);
        prop_assert!(!validation.valid);

        rules::consume_invalid_turn(&mut state);
        prop_assert_eq!(state.round, 2);
        prop_assert_eq!(state.user_score + state.bot_score, 0);
        prop_assert!(!state.user_bomb_used && !state.bot_bomb_used);
    }
}
