//! Board coordinates.
//!
//! A `Point` is a `(row, col)` pair. Rows count from 1 at the top, columns
//! from 1 at the left. Any pair of integers is representable; whether a
//! point lies on the 3x3 grid is decided by `Board::is_on_grid`.
//!
//! ## Notation
//!
//! On-grid points have a two-character name: a column letter followed by
//! the row digit, so `(2, 1)` is `A2` and `(1, 3)` is `C1`.
//!
//! ```
//! use hexapawn::core::Point;
//!
//! let p: Point = "b3".parse().unwrap();
//! assert_eq!(p, Point::new(3, 2));
//! assert_eq!(p.to_string(), "B3");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::error::{Error, Result};

/// Column letters, indexed by `col - 1`.
pub const COLUMN_NAMES: [char; 3] = ['A', 'B', 'C'];

/// A `(row, col)` coordinate.
///
/// Ordering is row-major, which is also the order boards are iterated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Column letter for this point, if the column is on the grid.
    #[must_use]
    pub fn column_name(self) -> Option<char> {
        usize::try_from(self.col)
            .ok()
            .and_then(|col| col.checked_sub(1))
            .and_then(|idx| COLUMN_NAMES.get(idx).copied())
    }
}

impl std::fmt::Display for Point {
    /// `A2` style for on-grid points, `(row, col)` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column_name() {
            Some(letter) if Board::is_on_grid(*self) => write!(f, "{}{}", letter, self.row),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::InvalidNotation {
                input: s.to_string(),
            });
        };

        let col = COLUMN_NAMES
            .iter()
            .position(|&name| name == column.to_ascii_uppercase())
            .ok_or(Error::InvalidColumn { column })? as i32
            + 1;

        let row = match row.to_digit(10) {
            Some(digit @ 1..=3) => digit as i32,
            _ => return Err(Error::InvalidRow { row }),
        };

        Ok(Point::new(row, col))
    }
}
