//! # hexapawn
//!
//! Rules engine for Hexapawn, a two-player pawn game on a 3x3 board.
//!
//! ## Rules
//!
//! - Each side starts with three pawns on its home row; `X` moves first
//! - A pawn advances one row straight ahead onto an empty square, or
//!   captures one row ahead and one column sideways
//! - Reaching the opponent's home row wins
//! - A player with no legal move on their turn loses
//!
//! ## Design
//!
//! - **Immutable positions**: `GameState::apply_move` returns a new state;
//!   the old one is never touched.
//! - **Persistent Data Structures**: O(1) board cloning via `im-rs`.
//! - **Deterministic enumeration**: `legal_moves` always lists moves in the
//!   same order for the same position.
//!
//! ## Modules
//!
//! - `core`: Players, points, moves, board, game state, RNG
//! - `rules`: `RulesEngine` trait consumed by agents, `GameResult`
//! - `play`: Agents and the match driver
//! - `error`: Recoverable errors (notation, checked moves, matches)

pub mod core;
pub mod error;
pub mod play;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, GameRng, GameState, Move, MoveList, MoveRecord, Player, Point, BOARD_SIZE, COLS, ROWS,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::play::{play_match, play_random_match, Agent, MatchConfig, MatchOutcome, RandomAgent};
