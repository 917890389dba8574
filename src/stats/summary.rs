//! Win/loss/draw aggregation over the history store.
//!
//! Stats hold no state of their own: they are recomputed from a history
//! snapshot after every append or clear.

use serde::{Deserialize, Serialize};

use crate::core::History;
use crate::rules::Outcome;

/// Derived totals for the history panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Integer percentage of wins, rounded half-up. 0 for an empty history.
    pub win_rate: u32,
}

impl Stats {
    /// Tally a sequence of outcomes.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut stats = Stats::default();
        for outcome in outcomes {
            stats.total += 1;
            match outcome {
                Outcome::Win => stats.wins += 1,
                Outcome::Lose => stats.losses += 1,
                Outcome::Draw => stats.draws += 1,
            }
        }
        stats.win_rate = win_rate(stats.wins, stats.total);
        stats
    }

    /// Each outcome's share of a full 360-degree chart.
    ///
    /// All zero when there are no rounds.
    #[must_use]
    pub fn segment_angles(&self) -> SegmentAngles {
        if self.total == 0 {
            return SegmentAngles::default();
        }
        let degrees = |n: u32| f64::from(n) / f64::from(self.total) * 360.0;
        SegmentAngles {
            wins: degrees(self.wins),
            losses: degrees(self.losses),
            draws: degrees(self.draws),
        }
    }
}

/// Chart segment sizes in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentAngles {
    pub wins: f64,
    pub losses: f64,
    pub draws: f64,
}

/// `round(100 * wins / total)` with halves rounded up, 0 when `total == 0`.
#[must_use]
pub fn win_rate(wins: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (wins, total) = (u64::from(wins), u64::from(total));
    ((200 * wins + total) / (2 * total)) as u32
}

/// Aggregate a history snapshot.
#[must_use]
pub fn compute_stats(history: &History) -> Stats {
    Stats::from_outcomes(history.iter().map(|r| r.outcome))
}
