//! Move-selection agents.
//!
//! An `Agent` picks a move for the player to move. Agents are generic over
//! `RulesEngine`, so they only see legal-move enumeration, move
//! application and terminal checks.

use crate::core::{GameRng, GameState, Move};
use crate::rules::RulesEngine;

/// Chooses moves for whichever player is to move.
pub trait Agent<S: RulesEngine = GameState> {
    /// Select a move for `state.next_player()`.
    ///
    /// Returns `None` only when `state` has no legal moves. A returned move
    /// must pass `state.is_valid_move`.
    fn select_move(&mut self, state: &S) -> Option<Move>;
}

/// Picks uniformly among the legal moves.
///
/// Deterministic for a given `GameRng` seed.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Shorthand for `RandomAgent::new(GameRng::new(seed))`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<S: RulesEngine> Agent<S> for RandomAgent {
    fn select_move(&mut self, state: &S) -> Option<Move> {
        let moves = state.legal_moves();
        self.rng.choose(&moves).copied()
    }
}
