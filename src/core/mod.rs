//! Core engine types: players, points, moves, board, game state, RNG.
//!
//! Everything here is a value type. The only mutation is `Board::place`,
//! applied to a freshly cloned board inside `GameState::apply_move`.

pub mod board;
pub mod moves;
pub mod player;
pub mod point;
pub mod rng;
pub mod state;

pub use board::{Board, BOARD_SIZE, COLS, ROWS};
pub use moves::{Move, MoveList, MoveRecord};
pub use player::Player;
pub use point::{Point, COLUMN_NAMES};
pub use rng::GameRng;
pub use state::GameState;
