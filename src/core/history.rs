//! Append-only log of completed rounds.
//!
//! Insertion order is chronological order. Records are only ever appended
//! during play; the whole log is emptied by an explicit clear.
//!
//! Backed by `im::Vector` so the session can hand out O(1) snapshots of the
//! log to persistence and UI consumers without copying it.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::moves::Move;
use super::record::GameRecord;
use crate::rules::Outcome;

/// Selects which records a history view shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeFilter {
    #[default]
    All,
    Win,
    Lose,
    Draw,
}

impl OutcomeFilter {
    /// Check whether a record passes this filter.
    #[must_use]
    pub fn matches(self, record: &GameRecord) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::Win => record.outcome == Outcome::Win,
            OutcomeFilter::Lose => record.outcome == Outcome::Lose,
            OutcomeFilter::Draw => record.outcome == Outcome::Draw,
        }
    }
}

/// Ordered store of `GameRecord`s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vector<GameRecord>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a completed round.
    pub fn push(&mut self, record: GameRecord) {
        self.records.push_back(record);
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GameRecord> + '_ {
        self.records.iter()
    }

    /// The most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GameRecord> {
        self.records.back()
    }

    /// The player's moves in chronological order.
    pub fn player_moves(&self) -> impl DoubleEndedIterator<Item = Move> + '_ {
        self.records.iter().map(|r| r.player_move)
    }

    /// How many times the player threw each move, indexed by `Move::index()`.
    #[must_use]
    pub fn player_move_counts(&self) -> [u32; 3] {
        let mut counts = [0u32; 3];
        for m in self.player_moves() {
            counts[m.index()] += 1;
        }
        counts
    }

    /// The player's last `n` moves in chronological order.
    ///
    /// Returns fewer than `n` moves when the history is shorter.
    #[must_use]
    pub fn last_player_moves(&self, n: usize) -> SmallVec<[Move; 3]> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).map(|r| r.player_move).collect()
    }

    /// The last `n` records, most recent first.
    ///
    /// Order is by insertion, not by round number; the two differ once a
    /// score reset restarts the numbering.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<GameRecord> {
        self.records.iter().rev().take(n).copied().collect()
    }

    /// Records passing `filter`, most recent first (insertion order, as `recent`).
    #[must_use]
    pub fn filtered(&self, filter: OutcomeFilter) -> Vec<GameRecord> {
        self.records
            .iter()
            .rev()
            .filter(|r| filter.matches(r))
            .copied()
            .collect()
    }
}

impl FromIterator<GameRecord> for History {
    fn from_iter<I: IntoIterator<Item = GameRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GameRecord;
    type IntoIter = im::vector::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
