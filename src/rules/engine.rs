//! Rules engine trait consumed by move-selection agents.
//!
//! An agent only ever needs to:
//! - Enumerate legal moves
//! - Apply a move to get the successor position
//! - Ask whether the game is over and who won
//!
//! Positions are immutable snapshots, so `apply_move` returns a new value
//! and leaves the receiver untouched. Lookahead can hold any number of
//! positions at once.

use serde::{Deserialize, Serialize};

use crate::core::moves::{Move, MoveList};
use crate::core::player::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Game ended with no winner (full board).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "Winner: {p}"),
            GameResult::Draw => write!(f, "It's a draw."),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if the player to move is stuck; never an error
/// - `legal_moves`: Order must be deterministic for a given position
/// - `apply_move`: Only defined for moves that pass `is_valid_move`
/// - `winner`: Must agree with `is_over` on terminal positions
pub trait RulesEngine: Sized {
    /// The player whose turn it is.
    fn next_player(&self) -> Player;

    /// All legal moves for the player to move.
    fn legal_moves(&self) -> MoveList;

    /// Check a single candidate move.
    fn is_valid_move(&self, mv: &Move) -> bool;

    /// Successor position after `mv`.
    ///
    /// Callers must check `is_valid_move` first.
    fn apply_move(&self, mv: Move) -> Self;

    /// Check if the game is over.
    fn is_over(&self) -> bool;

    /// The winner of a finished game, or `None` for a draw or a live game.
    fn winner(&self) -> Option<Player>;

    // === Convenience Methods ===

    /// Combined terminal check.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        Some(match self.winner() {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }
}
