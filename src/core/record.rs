//! Completed-round records.
//!
//! A `GameRecord` is created once per resolved round and never mutated.
//! Field names on the wire match the persisted history format:
//! `{ round, playerChoice, computerChoice, result }`.

use serde::{Deserialize, Serialize};

use super::moves::Move;
use crate::rules::{resolve, Outcome};

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRecord {
    /// Round number (starts at 1 after a reset).
    pub round: u32,

    /// The player's move.
    #[serde(rename = "playerChoice")]
    pub player_move: Move,

    /// The computer's move.
    #[serde(rename = "computerChoice")]
    pub computer_move: Move,

    /// Outcome from the player's perspective.
    #[serde(rename = "result")]
    pub outcome: Outcome,
}

impl GameRecord {
    /// Create a record, resolving the outcome from the two moves.
    #[must_use]
    pub fn new(round: u32, player_move: Move, computer_move: Move) -> Self {
        Self {
            round,
            player_move,
            computer_move,
            outcome: resolve(player_move, computer_move),
        }
    }
}
