//! Statistics derived from the round history.

pub mod summary;

pub use summary::{compute_stats, win_rate, SegmentAngles, Stats};
