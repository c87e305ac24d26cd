//! Match configuration parameters.

use serde::{Deserialize, Serialize};

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Random seed for agents built by the runner.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Maximum plies before the match is abandoned.
    /// Hexapawn games end well within the default; the limit only
    /// guards against misbehaving agents or engines.
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_plies: 64,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the agent seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the ply limit.
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }
}
