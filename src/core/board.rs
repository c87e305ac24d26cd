//! The 3x3 board.
//!
//! ## Storage
//!
//! A `Board` is a sparse map from `Point` to `Option<Player>`. A missing
//! entry and an explicit `None` (left behind when a pawn moves away) both
//! mean "empty"; equality and hashing treat them the same.
//!
//! The map is an `im::OrdMap`, so cloning a board is O(1) and shares
//! structure with the original. Writes to a clone never become visible
//! through the board it was cloned from.
//!
//! ## Bounds
//!
//! The grid size is the constant `BOARD_SIZE`. Everything that enumerates
//! the board walks `ROWS` x `COLS`; nothing infers bounds from contents.

use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::point::{Point, COLUMN_NAMES};
use crate::error::{Error, Result};

/// Side length of the grid.
pub const BOARD_SIZE: i32 = 3;

/// Valid row indices, top to bottom.
pub const ROWS: RangeInclusive<i32> = 1..=BOARD_SIZE;

/// Valid column indices, left to right.
pub const COLS: RangeInclusive<i32> = 1..=BOARD_SIZE;

/// Board contents, keyed by point.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Point, Player)>", into = "Vec<(Point, Player)>")]
pub struct Board {
    grid: OrdMap<Point, Option<Player>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with the given pawns and every other point empty.
    ///
    /// # Panics
    ///
    /// Panics if any point is off the grid or appears more than once.
    /// Use `Board::try_from` for untrusted input.
    pub fn from_pieces(pieces: impl IntoIterator<Item = (Point, Player)>) -> Self {
        let mut grid = OrdMap::new();
        for (point, player) in pieces {
            assert!(Self::is_on_grid(point), "piece placed off the grid at {point}");
            assert!(
                grid.insert(point, Some(player)).is_none(),
                "point {point} given more than once"
            );
        }
        Self { grid }
    }

    /// True iff `1 <= row <= BOARD_SIZE` and `1 <= col <= BOARD_SIZE`.
    #[must_use]
    pub fn is_on_grid(point: Point) -> bool {
        ROWS.contains(&point.row) && COLS.contains(&point.col)
    }

    /// Occupant of `point`, or `None` if empty, never set, or off the grid.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<Player> {
        self.grid.get(&point).copied().flatten()
    }

    /// Move `player`'s pawn from `start` to `end`, vacating `start`.
    ///
    /// Whatever stood on `end` is overwritten; capture legality is checked
    /// before this is reached.
    ///
    /// # Panics
    ///
    /// Panics if either point is off the grid or `start` does not hold
    /// one of `player`'s pawns.
    pub fn place(&mut self, player: Player, start: Point, end: Point) {
        assert!(Self::is_on_grid(start), "start point {start} is off the grid");
        assert!(Self::is_on_grid(end), "end point {end} is off the grid");
        assert_eq!(
            self.get(start),
            Some(player),
            "start point {start} does not hold a pawn of {player}"
        );

        self.grid.insert(end, Some(player));
        self.grid.insert(start, None);
    }

    /// All on-grid points, row-major.
    pub fn points() -> impl Iterator<Item = Point> {
        ROWS.flat_map(|row| COLS.map(move |col| Point::new(row, col)))
    }

    /// Occupied points and their owners, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Point, Player)> + '_ {
        self.grid
            .iter()
            .filter_map(|(point, occupant)| occupant.map(|player| (*point, player)))
    }

    /// Number of pawns `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces().filter(|(_, p)| *p == player).count()
    }

    /// True iff every on-grid point is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        Self::points().all(|point| self.get(point).is_some())
    }

    /// True iff `player` has a pawn anywhere on `row`.
    #[must_use]
    pub fn occupies_row(&self, player: Player, row: i32) -> bool {
        COLS.into_iter().any(|col| self.get(Point::new(row, col)) == Some(player))
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces().eq(other.pieces())
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for piece in self.pieces() {
            piece.hash(state);
        }
    }
}

/// Checked construction, used when deserializing.
impl TryFrom<Vec<(Point, Player)>> for Board {
    type Error = Error;

    fn try_from(pieces: Vec<(Point, Player)>) -> Result<Self> {
        let mut grid = OrdMap::new();
        for (point, player) in pieces {
            if !Self::is_on_grid(point) {
                return Err(Error::OffGrid { point });
            }
            if grid.insert(point, Some(player)).is_some() {
                return Err(Error::DuplicatePiece { point });
            }
        }
        Ok(Self { grid })
    }
}

impl From<Board> for Vec<(Point, Player)> {
    fn from(board: Board) -> Self {
        board.pieces().collect()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with column letters across the top:
    ///
    /// ```text
    ///    A   B   C
    /// 1  O | O | O
    /// 2    |   |
    /// 3  X | X | X
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header: Vec<String> = COLUMN_NAMES.iter().map(char::to_string).collect();
        writeln!(f, "   {}", header.join("   "))?;

        for row in ROWS {
            let cells: Vec<String> = COLS
                .map(|col| {
                    self.get(Point::new(row, col))
                        .map_or(' ', Player::symbol)
                        .to_string()
                })
                .collect();
            writeln!(f, "{}  {}", row, cells.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_is_on_grid() {
        for row in -1..=5 {
            for col in -1..=5 {
                let expected = (1..=3).contains(&row) && (1..=3).contains(&col);
                assert_eq!(Board::is_on_grid(p(row, col)), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_get_empty_and_off_grid() {
        let board = Board::from_pieces([(p(2, 2), Player::X)]);

        assert_eq!(board.get(p(2, 2)), Some(Player::X));
        assert_eq!(board.get(p(1, 1)), None);
        assert_eq!(board.get(p(0, 0)), None);
        assert_eq!(board.get(p(7, -3)), None);
    }

    #[test]
    fn test_place_moves_pawn() {
        let mut board = Board::from_pieces([(p(3, 1), Player::X)]);
        board.place(Player::X, p(3, 1), p(2, 1));

        assert_eq!(board.get(p(2, 1)), Some(Player::X));
        assert_eq!(board.get(p(3, 1)), None);
        assert_eq!(board.count(Player::X), 1);
    }

    #[test]
    fn test_place_overwrites_capture_target() {
        let mut board = Board::from_pieces([(p(3, 1), Player::X), (p(2, 2), Player::O)]);
        board.place(Player::X, p(3, 1), p(2, 2));

        assert_eq!(board.get(p(2, 2)), Some(Player::X));
        assert_eq!(board.count(Player::O), 0);
    }

    #[test]
    #[should_panic(expected = "does not hold a pawn of X")]
    fn test_place_requires_owned_start() {
        let mut board = Board::from_pieces([(p(1, 1), Player::O)]);
        board.place(Player::X, p(1, 1), p(2, 1));
    }

    #[test]
    #[should_panic(expected = "off the grid")]
    fn test_place_rejects_off_grid_end() {
        let mut board = Board::from_pieces([(p(1, 1), Player::O)]);
        board.place(Player::O, p(1, 1), p(0, 1));
    }

    #[test]
    #[should_panic(expected = "off the grid")]
    fn test_from_pieces_rejects_off_grid() {
        let _ = Board::from_pieces([(p(4, 1), Player::O)]);
    }

    #[test]
    #[should_panic(expected = "given more than once")]
    fn test_from_pieces_rejects_duplicates() {
        let _ = Board::from_pieces([(p(2, 2), Player::O), (p(2, 2), Player::X)]);
    }

    #[test]
    fn test_try_from_checks_pieces() {
        let board = Board::try_from(vec![(p(1, 1), Player::O)]).unwrap();
        assert_eq!(board.get(p(1, 1)), Some(Player::O));

        assert!(matches!(
            Board::try_from(vec![(p(0, 2), Player::X)]),
            Err(Error::OffGrid { point }) if point == p(0, 2)
        ));
        assert!(matches!(
            Board::try_from(vec![(p(2, 2), Player::O), (p(2, 2), Player::X)]),
            Err(Error::DuplicatePiece { point }) if point == p(2, 2)
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::from_pieces([(p(3, 2), Player::X)]);
        let mut cloned = original.clone();
        cloned.place(Player::X, p(3, 2), p(2, 2));

        assert_eq!(original.get(p(3, 2)), Some(Player::X));
        assert_eq!(original.get(p(2, 2)), None);
        assert_eq!(cloned.get(p(2, 2)), Some(Player::X));
    }

    #[test]
    fn test_vacated_point_equals_never_set() {
        let mut moved = Board::from_pieces([(p(3, 2), Player::X)]);
        moved.place(Player::X, p(3, 2), p(2, 2));
        let fresh = Board::from_pieces([(p(2, 2), Player::X)]);

        assert_eq!(moved, fresh);
    }

    #[test]
    fn test_points_row_major() {
        let points: Vec<_> = Board::points().collect();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], p(1, 1));
        assert_eq!(points[1], p(1, 2));
        assert_eq!(points[3], p(2, 1));
        assert_eq!(points[8], p(3, 3));
    }

    #[test]
    fn test_is_full() {
        assert!(!Board::new().is_full());

        let full = Board::from_pieces(Board::points().map(|point| (point, Player::O)));
        assert!(full.is_full());
    }

    #[test]
    fn test_occupies_row() {
        let board = Board::from_pieces([(p(1, 3), Player::X)]);
        assert!(board.occupies_row(Player::X, 1));
        assert!(!board.occupies_row(Player::O, 1));
        assert!(!board.occupies_row(Player::X, 2));
    }

    #[test]
    fn test_display() {
        let board = Board::from_pieces([
            (p(1, 1), Player::O),
            (p(2, 2), Player::X),
            (p(3, 3), Player::X),
        ]);

        let expected = "   A   B   C\n1  O |   |  \n2    | X |  \n3    |   | X\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::from_pieces([(p(1, 2), Player::O), (p(3, 1), Player::X)]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_bad_pieces() {
        let off_grid = serde_json::from_str::<Board>(r#"[[{"row":4,"col":1},"X"]]"#);
        let err = off_grid.unwrap_err().to_string();
        assert!(err.contains("off the grid"), "{err}");

        let duplicate = serde_json::from_str::<Board>(
            r#"[[{"row":2,"col":2},"X"],[{"row":2,"col":2},"O"]]"#,
        );
        assert!(duplicate.is_err());
    }
}
