//! Error types for recoverable failures.
//!
//! Caller-contract violations inside the engine (placing a pawn the mover
//! does not own, applying an unchecked illegal move) are panics, not
//! variants here.

use thiserror::Error;

use crate::core::{Move, Player, Point};

/// Main error type for the hexapawn crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move notation '{input}' (expected e.g. 'A2-B1')")]
    InvalidNotation { input: String },

    #[error("invalid column '{column}' (expected A, B or C)")]
    InvalidColumn { column: char },

    #[error("invalid row '{row}' (expected 1, 2 or 3)")]
    InvalidRow { row: char },

    #[error("point {point} is off the grid")]
    OffGrid { point: Point },

    #[error("point {point} holds more than one pawn")]
    DuplicatePiece { point: Point },

    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },

    #[error("game already over")]
    GameOver,

    #[error("agent playing {player} selected illegal move {mv}")]
    AgentIllegalMove { player: Player, mv: Move },

    #[error("agent playing {player} returned no move in a live position")]
    AgentNoMove { player: Player },

    #[error("game did not finish within {limit} plies")]
    PlyLimit { limit: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
