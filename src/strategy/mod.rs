//! The computer opponent.
//!
//! Strategies are trait-based so a caller can plug in its own opponent:
//! - `RandomStrategy`: Easy
//! - `FrequencyStrategy`: Medium
//! - `PatternStrategy`: Hard
//!
//! `StrategyEngine` maps a `Difficulty` onto the configured strategy.

pub mod config;
pub mod policy;

pub use config::StrategyConfig;
pub use policy::{
    choose_computer_move, most_frequent_player_move, FrequencyStrategy, PatternStrategy,
    RandomStrategy, Strategy, StrategyEngine, PATTERN_WINDOW,
};
