//! Round resolution.
//!
//! `resolve` is a pure, total function of the two moves. Outcomes are always
//! reported from the player's perspective.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Move;

/// Result of a round for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same round seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score a round.
///
/// Equal moves draw. Otherwise the player wins iff their move beats the
/// computer's under the cyclic relation (Rock > Scissors > Paper > Rock).
///
/// ```
/// use rps_engine::{resolve, Move, Outcome};
///
/// assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::Win);
/// assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::Lose);
/// assert_eq!(resolve(Move::Paper, Move::Paper), Outcome::Draw);
/// ```
#[must_use]
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
