//! Game state: an immutable Hexapawn position.
//!
//! ## GameState
//!
//! - Board contents
//! - Player to move
//! - The move that produced this position, if any
//!
//! A `GameState` is never mutated. `apply_move` clones the board (O(1),
//! structurally shared) and returns a new state, so any number of
//! positions can be held side by side during lookahead.
//!
//! ## Terminal Conditions
//!
//! Checked in this order:
//! 1. `X` has a pawn on row 1 (`X` wins)
//! 2. `O` has a pawn on row 3 (`O` wins)
//! 3. `O` is to move with no legal moves (`X` wins)
//! 4. `X` is to move with no legal moves (`O` wins)
//! 5. The board is full (draw; unreachable in legal play)
//!
//! Having no legal moves loses, unlike stalemate in chess.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::board::Board;
use super::moves::{Move, MoveList};
use super::player::Player;
use super::point::Point;
use crate::error::{Error, Result};
use crate::rules::RulesEngine;

/// An immutable Hexapawn position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    next_player: Player,
    last_move: Option<Move>,
}

impl GameState {
    /// The starting position.
    ///
    /// `O` pawns fill row 1, `X` pawns fill row 3, `X` moves first.
    ///
    /// ```
    /// use hexapawn::core::{GameState, Player, Point};
    ///
    /// let game = GameState::new_game();
    /// assert_eq!(game.next_player(), Player::X);
    /// assert_eq!(game.board().get(Point::new(1, 2)), Some(Player::O));
    /// assert_eq!(game.legal_moves().len(), 3);
    /// ```
    #[must_use]
    pub fn new_game() -> Self {
        let board = Board::from_pieces(Player::ALL.into_iter().flat_map(|player| {
            Board::points()
                .filter(move |point| point.row == player.home_row())
                .map(move |point| (point, player))
        }));

        Self {
            board,
            next_player: Player::X,
            last_move: None,
        }
    }

    /// Build an arbitrary position.
    ///
    /// No reachability check is made; positions that cannot arise in play
    /// are accepted.
    #[must_use]
    pub fn from_parts(board: Board, next_player: Player, last_move: Option<Move>) -> Self {
        Self {
            board,
            next_player,
            last_move,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Check whether `mv` is legal for the player to move.
    ///
    /// A move is legal when the mover owns the start point, the row
    /// changes by exactly one step in the mover's direction, and either
    /// - the column is unchanged and the end point is empty, or
    /// - the column changes by one and the end point holds an enemy pawn.
    ///
    /// End points off the grid are rejected outright. Legal play never
    /// produces one; the check only matters for positions built with
    /// `from_parts`.
    #[must_use]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        let mover = self.next_player;

        if self.board.get(mv.start_point) != Some(mover) || !Board::is_on_grid(mv.end_point) {
            return false;
        }
        if mv.row_delta() != i64::from(mover.forward()) {
            return false;
        }

        let target = self.board.get(mv.end_point);
        match mv.col_distance() {
            0 => target.is_none(),
            1 => target == Some(mover.other()),
            _ => false,
        }
    }

    /// All legal moves for the player to move.
    ///
    /// Every (start, end) pair on the grid is tried, start points
    /// row-major, then end points row-major. The order is stable for a
    /// given position. Empty when the player to move is stuck.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        Board::points()
            .flat_map(|start| Board::points().map(move |end| Move::new(start, end)))
            .filter(|mv| self.is_valid_move(mv))
            .collect()
    }

    /// Successor position after `mv`.
    ///
    /// # Panics
    ///
    /// Panics if the player to move does not own `mv.start_point` or either
    /// point is off the grid. Check `is_valid_move` first, or use
    /// `try_apply_move`.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Self {
        let mut board = self.board.clone();
        board.place(self.next_player, mv.start_point, mv.end_point);
        trace!(player = %self.next_player, %mv, "applied move");

        Self {
            board,
            next_player: self.next_player.other(),
            last_move: Some(mv),
        }
    }

    /// Checked `apply_move`.
    ///
    /// Returns `Error::GameOver` on a finished game and
    /// `Error::IllegalMove` when `is_valid_move` fails.
    pub fn try_apply_move(&self, mv: Move) -> Result<Self> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if !self.is_valid_move(&mv) {
            return Err(Error::IllegalMove { mv });
        }
        Ok(self.apply_move(mv))
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// The winner, evaluated in terminal-condition order.
    ///
    /// `None` while the game is live, and for the full-board draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.reached_end(Player::X) {
            return Some(Player::X);
        }
        if self.reached_end(Player::O) {
            return Some(Player::O);
        }
        if self.is_stuck(Player::O) {
            return Some(Player::X);
        }
        if self.is_stuck(Player::X) {
            return Some(Player::O);
        }
        None
    }

    /// `player` has a pawn on the opponent's home row.
    fn reached_end(&self, player: Player) -> bool {
        self.board.occupies_row(player, player.goal_row())
    }

    /// `player` is to move and has nothing legal to play.
    fn is_stuck(&self, player: Player) -> bool {
        self.next_player == player && self.legal_moves().is_empty()
    }

    /// True if the player to move has a pawn on `point`.
    #[must_use]
    pub fn owns(&self, point: Point) -> bool {
        self.board.get(point) == Some(self.next_player)
    }
}

impl RulesEngine for GameState {
    fn next_player(&self) -> Player {
        self.next_player
    }

    fn legal_moves(&self) -> MoveList {
        GameState::legal_moves(self)
    }

    fn is_valid_move(&self, mv: &Move) -> bool {
        GameState::is_valid_move(self, mv)
    }

    fn apply_move(&self, mv: Move) -> Self {
        GameState::apply_move(self, mv)
    }

    fn is_over(&self) -> bool {
        GameState::is_over(self)
    }

    fn winner(&self) -> Option<Player> {
        GameState::winner(self)
    }
}
