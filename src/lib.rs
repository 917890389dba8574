//! # rps-engine
//!
//! Rock-Paper-Scissors game engine with an adaptive computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: resolving rounds, choosing moves and computing stats are
//!    plain functions returning plain data. Rendering, audio and timers are
//!    the caller's business.
//!
//! 2. **Injected randomness**: strategies draw from a seedable `GameRng`
//!    owned by the session, so every decision is reproducible in tests.
//!
//! 3. **One explicit session**: counters, settings and history live in a
//!    single `Session` value. No globals.
//!
//! ## Modules
//!
//! - `core`: moves, round records, the history store, settings, RNG
//! - `rules`: round resolution
//! - `strategy`: Easy/Medium/Hard computer opponents
//! - `stats`: win/loss/draw aggregation
//! - `session`: scores, reveal gating, snapshot persistence
//!
//! ## Example
//!
//! ```
//! use rps_engine::{Difficulty, Move, Session, SettingsUpdate};
//!
//! let mut session = Session::new(42);
//! session.update_settings(&SettingsUpdate::new().with_difficulty(Difficulty::Hard));
//!
//! let pending = session.submit_move(Move::Rock).unwrap();
//! // ... show both hands for `pending.reveal_delay` ...
//! let report = session.complete_reveal().unwrap();
//!
//! assert_eq!(report.round_number, 1);
//! assert_eq!(report.stats.total, 1);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod strategy;
pub mod stats;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AnimationSpeed, Difficulty, GameRecord, GameRng, History, Move, OutcomeFilter,
    Settings, SettingsUpdate, Theme,
};

pub use crate::error::{ParseError, SessionError, SnapshotError, StoreError};

pub use crate::rules::{resolve, Outcome};

pub use crate::strategy::{
    choose_computer_move, FrequencyStrategy, PatternStrategy, RandomStrategy, Strategy,
    StrategyConfig, StrategyEngine,
};

pub use crate::stats::{compute_stats, SegmentAngles, Stats};

pub use crate::session::{
    MemoryStore, PendingRound, RevealPhase, RoundReport, Session, SessionState, Snapshot,
    SnapshotStore, SNAPSHOT_KEY,
};
