//! Core game types: moves, round records, the history store, settings, RNG.
//!
//! Everything here is plain data. Behaviour that decides or scores rounds
//! lives in `rules`, `strategy` and `stats`.

pub mod moves;
pub mod record;
pub mod history;
pub mod config;
pub mod rng;

pub use moves::Move;
pub use record::GameRecord;
pub use history::{History, OutcomeFilter};
pub use config::{
    clamp_volume, AnimationSpeed, Difficulty, Settings, SettingsUpdate, Theme, DEFAULT_SOUND_VOLUME,
};
pub use rng::GameRng;
