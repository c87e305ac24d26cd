//! Rules engine trait for agents.
//!
//! `RulesEngine` is the whole contract between a position and whatever
//! chooses moves for it:
//! - Legal moves for the player to move
//! - How a move produces the next position
//! - Win/draw conditions
//!
//! `GameState` implements it. Agents are written against the trait.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
