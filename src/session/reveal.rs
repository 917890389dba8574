//! Submit/reveal gating.
//!
//! A submitted move is not scored at once. The presentation layer shows both
//! hands for `reveal_delay` and then calls back to commit the round. While a
//! round is awaiting its reveal, further submissions are rejected rather than
//! queued, so one logical round can only ever commit once.
//!
//! ```text
//! Idle --submit--> AwaitingReveal --complete--> Idle
//!                      |  ^
//!                      +--+ submit: rejected (Busy)
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{GameRecord, Move};
use crate::rules::Outcome;
use crate::stats::Stats;

/// A round whose moves are chosen but not yet scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRound {
    pub player_move: Move,
    pub computer_move: Move,
    /// How long the presentation layer should wait before completing.
    pub reveal_delay: Duration,
}

/// Busy/idle state of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Idle,
    AwaitingReveal(PendingRound),
}

impl RevealPhase {
    /// Check if a round is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, RevealPhase::AwaitingReveal(_))
    }

    /// The round in flight, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingRound> {
        match self {
            RevealPhase::AwaitingReveal(pending) => Some(pending),
            RevealPhase::Idle => None,
        }
    }
}

/// Everything the presentation layer needs after a round commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub record: GameRecord,
    pub outcome: Outcome,
    pub player_score: u32,
    pub computer_score: u32,
    pub round_number: u32,
    pub stats: Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default_is_idle() {
        let phase = RevealPhase::default();
        assert!(!phase.is_busy());
        assert!(phase.pending().is_none());
    }

    #[test]
    fn test_awaiting_exposes_pending() {
        let pending = PendingRound {
            player_move: Move::Rock,
            computer_move: Move::Paper,
            reveal_delay: Duration::from_millis(500),
        };
        let phase = RevealPhase::AwaitingReveal(pending);

        assert!(phase.is_busy());
        assert_eq!(phase.pending(), Some(&pending));
    }
}
