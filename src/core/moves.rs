//! Move representation.
//!
//! A `Move` is an ordered pair of points. It carries no validation of its
//! own; whether it is legal depends on the `GameState` it is played in.
//!
//! Moves print and parse in the `A2-B1` form used by the interactive game:
//!
//! ```
//! use hexapawn::core::{Move, Point};
//!
//! let mv: Move = "A3-A2".parse().unwrap();
//! assert_eq!(mv, Move::new(Point::new(3, 1), Point::new(2, 1)));
//! assert_eq!(mv.to_string(), "A3-A2");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use super::point::Point;
use crate::error::{Error, Result};

/// Legal moves of one position.
///
/// A side has at most 3 pawns with at most 3 moves each, so this never
/// spills to the heap.
pub type MoveList = SmallVec<[Move; 9]>;

/// A pawn move from `start_point` to `end_point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start_point: Point,
    pub end_point: Point,
}

impl Move {
    #[must_use]
    pub const fn new(start_point: Point, end_point: Point) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    /// Row delta of this move, widened so off-grid points cannot overflow.
    #[must_use]
    pub const fn row_delta(&self) -> i64 {
        self.end_point.row as i64 - self.start_point.row as i64
    }

    /// Absolute column delta; 0 for advances, 1 for captures.
    #[must_use]
    pub const fn col_distance(&self) -> u32 {
        self.end_point.col.abs_diff(self.start_point.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_point, self.end_point)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s.trim().split_once('-').ok_or_else(|| Error::InvalidNotation {
            input: s.to_string(),
        })?;

        if start.trim().len() != start.len() || end.trim().len() != end.len() {
            return Err(Error::InvalidNotation {
                input: s.to_string(),
            });
        }

        Ok(Move::new(start.parse()?, end.parse()?))
    }
}

/// A played move with the player who made it.
///
/// Used for match history and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move played.
    pub mv: Move,

    /// Ply number, starting at 0 for the first move of the game.
    pub ply: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, mv: Move, ply: u32) -> Self {
        Self { player, mv, ply }
    }
}
