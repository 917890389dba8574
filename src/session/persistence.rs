//! Snapshot persistence.
//!
//! The session never owns durable storage. It hands a serializable
//! `Snapshot` to a `SnapshotStore` after every state change and reads one back
//! on startup.
//!
//! ## Failure policy
//!
//! - Missing or unparseable snapshot: start from a default session
//! - Unknown or wrongly typed theme, difficulty or speed: that field's default
//! - Save failure: logged and dropped; in-memory state is never touched
//!
//! ## Format
//!
//! A single JSON document under `SNAPSHOT_KEY`, every key optional:
//!
//! ```json
//! {
//!   "playerScore": 3, "computerScore": 1, "roundNumber": 5,
//!   "gameHistory": [{ "round": 1, "playerChoice": "rock",
//!                     "computerChoice": "scissors", "result": "win" }],
//!   "theme": "dark", "soundEnabled": true, "animationSpeed": 1,
//!   "soundVolume": 0.5, "difficulty": "hard"
//! }
//! ```

use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::state::SessionState;
use crate::core::{clamp_volume, AnimationSpeed, Difficulty, History, Settings, Theme};
use crate::error::{SnapshotError, StoreError};

/// Key the session snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "rpsGameData";

/// External key-value storage for snapshots.
pub trait SnapshotStore {
    /// Read the value under `key`. `Ok(None)` when nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, for tests and embedding without durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Seed a raw value, bypassing the session.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialized session state plus history.
///
/// Theme, difficulty and animation speed are kept as raw JSON values so one
/// bad value (wrong type, out of range, unknown name) only resets its own
/// field instead of discarding the whole snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub player_score: Option<u32>,
    pub computer_score: Option<u32>,
    pub round_number: Option<u32>,
    pub game_history: Option<History>,
    pub theme: Option<Value>,
    pub sound_enabled: Option<bool>,
    pub animation_speed: Option<Value>,
    pub sound_volume: Option<f64>,
    pub difficulty: Option<Value>,
}

impl Snapshot {
    /// Capture the current session.
    #[must_use]
    pub fn capture(state: &SessionState, history: &History) -> Self {
        let settings = &state.settings;
        Self {
            player_score: Some(state.player_score),
            computer_score: Some(state.computer_score),
            round_number: Some(state.round_number),
            game_history: Some(history.clone()),
            theme: Some(Value::from(settings.theme.as_str())),
            sound_enabled: Some(settings.sound_enabled),
            animation_speed: Some(Value::from(settings.animation_speed.index())),
            sound_volume: Some(settings.sound_volume),
            difficulty: Some(Value::from(settings.difficulty.as_str())),
        }
    }

    /// Rebuild session state and history, defaulting anything missing or invalid.
    #[must_use]
    pub fn into_parts(self) -> (SessionState, History) {
        let defaults = Settings::default();

        let theme = setting_or_default(self.theme, "theme", defaults.theme, |v| {
            v.as_str()?.parse::<Theme>().ok()
        });
        let difficulty = setting_or_default(self.difficulty, "difficulty", defaults.difficulty, |v| {
            v.as_str()?.parse::<Difficulty>().ok()
        });
        let animation_speed =
            setting_or_default(self.animation_speed, "animationSpeed", defaults.animation_speed, |v| {
                let index = u8::try_from(v.as_u64()?).ok()?;
                AnimationSpeed::from_index(index)
            });
        let sound_volume = self
            .sound_volume
            .and_then(clamp_volume)
            .unwrap_or(defaults.sound_volume);

        let state = SessionState {
            player_score: self.player_score.unwrap_or(0),
            computer_score: self.computer_score.unwrap_or(0),
            round_number: self.round_number.unwrap_or(0),
            settings: Settings {
                difficulty,
                theme,
                sound_enabled: self.sound_enabled.unwrap_or(defaults.sound_enabled),
                sound_volume,
                animation_speed,
            },
        };
        (state, self.game_history.unwrap_or_default())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decode one raw setting, falling back to `default` when it is absent or invalid.
fn setting_or_default<T: std::fmt::Debug>(
    raw: Option<Value>,
    key: &str,
    default: T,
    decode: impl FnOnce(&Value) -> Option<T>,
) -> T {
    let Some(value) = raw else {
        return default;
    };
    decode(&value).unwrap_or_else(|| {
        warn!("snapshot: invalid {key} {value}; using {default:?}");
        default
    })
}

/// Read the session snapshot, falling back to an empty one on any failure.
pub fn load_snapshot(store: &dyn SnapshotStore) -> Snapshot {
    match store.load(SNAPSHOT_KEY) {
        Ok(Some(json)) => Snapshot::from_json(&json).unwrap_or_else(|err| {
            warn!("discarding unreadable snapshot: {err}");
            Snapshot::default()
        }),
        Ok(None) => Snapshot::default(),
        Err(err) => {
            warn!("snapshot load failed: {err}");
            Snapshot::default()
        }
    }
}

/// Write the session snapshot.
pub fn save_snapshot(store: &mut dyn SnapshotStore, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let json = snapshot.to_json()?;
    store.save(SNAPSHOT_KEY, &json)?;
    Ok(())
}
