//! The three hand shapes and their cyclic dominance relation.
//!
//! Each move beats exactly one other move and loses to exactly one:
//!
//! ```text
//! Rock -> Scissors -> Paper -> Rock
//! ```
//!
//! (read "beats"). There is no total order, only this cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A hand shape thrown by either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in the fixed scan order used for tie-breaking.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Dense index (Rock=0, Paper=1, Scissors=2) for per-move tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The unique move that defeats `self`.
    ///
    /// ```
    /// use rps_engine::Move;
    ///
    /// assert_eq!(Move::Rock.counter(), Move::Paper);
    /// assert_eq!(Move::Paper.counter(), Move::Scissors);
    /// assert_eq!(Move::Scissors.counter(), Move::Rock);
    /// ```
    #[must_use]
    pub const fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// The unique move that `self` defeats.
    #[must_use]
    pub const fn victim(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Whether `self` defeats `other`.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.victim() == other
    }

    /// Lowercase name, as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(ParseError::InvalidMove(s.to_string())),
        }
    }
}
