//! Error types.
//!
//! The engine core is total over well-typed input. Errors only arise at the
//! boundary (parsing untrusted text), from the reveal state machine, and from
//! persistence backends.

use thiserror::Error;

/// Rejected boundary input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown move {0:?} (expected rock, paper or scissors)")]
    InvalidMove(String),

    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    #[error("unknown theme {0:?}")]
    InvalidTheme(String),

    #[error("animation speed index {0} out of range (expected 0..=2)")]
    InvalidAnimationSpeed(u8),
}

/// Misuse of the submit/reveal sequence.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A move was submitted while the previous round is still being revealed.
    #[error("a round is already awaiting its reveal")]
    Busy,

    /// A reveal was completed but no move had been submitted.
    #[error("no submitted round is awaiting a reveal")]
    NoPendingRound,
}

/// Failure reported by a snapshot store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot backend unavailable: {0}")]
    Unavailable(String),
}

/// Failure encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
