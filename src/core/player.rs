//! Player identification.
//!
//! ## Player
//!
//! Hexapawn always has exactly two sides. `X` moves first and starts on
//! the bottom row; `O` moves second and starts on the top row.
//!
//! Each side advances in one fixed direction, so the row arithmetic used
//! by move validation lives here next to the variants it depends on.

use serde::{Deserialize, Serialize};

use super::board::BOARD_SIZE;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First mover. Pawns start on row 3 and advance towards row 1.
    X,
    /// Second mover. Pawns start on row 1 and advance towards row 3.
    O,
}

impl Player {
    /// Both players, first mover first.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The opposing player.
    ///
    /// ```
    /// use hexapawn::core::Player;
    ///
    /// assert_eq!(Player::X.other(), Player::O);
    /// assert_eq!(Player::O.other().other(), Player::O);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Row delta of a single advance: -1 for `X`, +1 for `O`.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Player::X => -1,
            Player::O => 1,
        }
    }

    /// Row the player's pawns start on.
    #[must_use]
    pub const fn home_row(self) -> i32 {
        match self {
            Player::X => BOARD_SIZE,
            Player::O => 1,
        }
    }

    /// Row the player must reach to win (the opponent's home row).
    #[must_use]
    pub const fn goal_row(self) -> i32 {
        self.other().home_row()
    }

    /// Single-letter symbol used in board rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
