//! Move source trait and implementations.

use std::collections::VecDeque;

use crate::core::{GameRng, GameState, Move, Player};

/// Supplies the bot's move for each round.
pub trait MoveSource {
    /// Choose the bot's move for the current round.
    ///
    /// Implementations should respect the bot's bomb flag; a session
    /// rejects a bomb proposed after the bot has already used one.
    fn next_move(&mut self, state: &GameState) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self, state: &GameState) -> Move {
        (**self).next_move(state)
    }
}

/// Choose uniformly among the moves the bot may still play.
///
/// Rock, paper and scissors are always available; bomb only while the
/// bot's bomb is unused.
pub fn select_opponent_move(state: &GameState, rng: &mut GameRng) -> Move {
    let moves: &[Move] = if state.bomb_used(Player::Bot) {
        &Move::STANDARD
    } else {
        &Move::ALL
    };
    let idx = rng.gen_range_usize(0..moves.len());
    moves[idx]
}

/// Uniform random opponent over a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomMoves {
    rng: GameRng,
}

impl RandomMoves {
    /// Deterministic opponent for the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Opponent seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    /// Wrap an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        log::debug!("random opponent seeded with {}", rng.seed());
        Self { rng }
    }

    /// Seeded if `seed` is given, entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }
}

impl MoveSource for RandomMoves {
    fn next_move(&mut self, state: &GameState) -> Move {
        select_opponent_move(state, &mut self.rng)
    }
}

/// Replays a fixed list of moves, then repeats a fallback.
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    script: VecDeque<Move>,
    fallback: Move,
}

impl ScriptedMoves {
    /// Play `moves` in order, then rock forever.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: moves.into_iter().collect(),
            fallback: Move::Rock,
        }
    }

    /// Always play the same move.
    #[must_use]
    pub fn repeating(mv: Move) -> Self {
        Self::new(Vec::<Move>::new()).with_fallback(mv)
    }

    /// Set the move played once the script runs out.
    #[must_use]
    pub fn with_fallback(mut self, mv: Move) -> Self {
        self.fallback = mv;
        self
    }

    /// Moves left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _state: &GameState) -> Move {
        self.script.pop_front().unwrap_or(self.fallback)
    }
}
