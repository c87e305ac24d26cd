//! Playing games with agents.
//!
//! - `Agent`: anything that picks a move for the player to move
//! - `RandomAgent`: uniform choice among legal moves, seeded
//! - `play_match`: run one game between two agents and record it
//!
//! No move search lives here. Agents that search plug in through the
//! `Agent` trait and the `RulesEngine` contract.
//!
//! ## Usage
//!
//! ```
//! use hexapawn::play::{play_random_match, MatchConfig};
//!
//! let outcome = play_random_match(&MatchConfig::default().with_seed(7)).unwrap();
//! assert!(outcome.final_state.is_over());
//! println!("{} after {} plies", outcome.result, outcome.plies());
//! ```

pub mod agent;
pub mod config;
pub mod runner;

pub use agent::{Agent, RandomAgent};
pub use config::MatchConfig;
pub use runner::{play_match, play_random_match, MatchOutcome};
