//! Session management: scores, settings, the reveal gate and persistence.
//!
//! Control flow for one round:
//!
//! 1. `submit_move`: the strategy engine picks the computer's reply
//! 2. presentation waits `PendingRound::reveal_delay`
//! 3. `complete_reveal`: resolve, update counters, append to history,
//!    recompute stats, save a snapshot

pub mod state;
pub mod reveal;
pub mod persistence;

pub use state::{Session, SessionState};
pub use reveal::{PendingRound, RevealPhase, RoundReport};
pub use persistence::{load_snapshot, save_snapshot, MemoryStore, Snapshot, SnapshotStore, SNAPSHOT_KEY};
