//! Strategy tuning parameters.

use serde::{Deserialize, Serialize};

/// Thresholds and probabilities for the adaptive strategies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Rounds of history Medium needs before it adapts (default: 6).
    /// Below this it plays uniformly at random.
    pub medium_min_history: usize,

    /// Chance that Medium counters the player's favourite move (default: 0.6).
    /// The remainder falls back to a uniform draw.
    pub medium_counter_probability: f64,

    /// Rounds of history Hard needs before it looks for patterns (default: 4).
    pub hard_min_history: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            medium_min_history: 6,
            medium_counter_probability: 0.6,
            hard_min_history: 4,
        }
    }
}

impl StrategyConfig {
    pub fn with_medium_min_history(mut self, rounds: usize) -> Self {
        self.medium_min_history = rounds;
        self
    }

    pub fn with_medium_counter_probability(mut self, p: f64) -> Self {
        self.medium_counter_probability = p;
        self
    }

    pub fn with_hard_min_history(mut self, rounds: usize) -> Self {
        self.hard_min_history = rounds;
        self
    }
}
