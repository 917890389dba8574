//! Player-facing settings: difficulty, theme, audio and animation pacing.
//!
//! ## Persisted forms
//!
//! - `Difficulty`: `"easy"`, `"medium"`, `"hard"`
//! - `Theme`: `"default"`, `"dark"`, `"pastel"`, `"neon"`
//! - `AnimationSpeed`: integer index `0` (slow), `1` (normal), `2` (fast)
//! - `sound_volume`: fraction in `[0, 1]`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ParseError;

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random moves.
    #[default]
    Easy,
    /// Counters the player's most frequent move part of the time.
    Medium,
    /// Detects short repetition and cycling patterns.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::InvalidDifficulty(s.to_string()))
    }
}

/// Visual theme. Opaque to the engine apart from the toggle rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Pastel,
    Neon,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Dark, Theme::Pastel, Theme::Neon];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Pastel => "pastel",
            Theme::Neon => "neon",
        }
    }

    /// Whether the theme uses a dark background.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark | Theme::Neon)
    }

    /// Light themes switch to `Dark`; dark themes switch back to `Default`.
    #[must_use]
    pub const fn toggled(self) -> Theme {
        if self.is_dark() {
            Theme::Default
        } else {
            Theme::Dark
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::InvalidTheme(s.to_string()))
    }
}

/// Pacing of the move reveal.
///
/// Serialized as its integer index, matching the persisted slider value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Index used by the persisted form (0..=2).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            AnimationSpeed::Slow => 0,
            AnimationSpeed::Normal => 1,
            AnimationSpeed::Fast => 2,
        }
    }

    /// Speed for a persisted index, if valid.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(AnimationSpeed::Slow),
            1 => Some(AnimationSpeed::Normal),
            2 => Some(AnimationSpeed::Fast),
            _ => None,
        }
    }

    /// Delay between move submission and the outcome reveal.
    #[must_use]
    pub const fn reveal_delay(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(1000),
            AnimationSpeed::Normal => Duration::from_millis(500),
            AnimationSpeed::Fast => Duration::from_millis(250),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "Slow",
            AnimationSpeed::Normal => "Normal",
            AnimationSpeed::Fast => "Fast",
        }
    }
}

impl TryFrom<u8> for AnimationSpeed {
    type Error = ParseError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(ParseError::InvalidAnimationSpeed(index))
    }
}

impl From<AnimationSpeed> for u8 {
    fn from(speed: AnimationSpeed) -> Self {
        speed.index()
    }
}

/// Default volume, as a fraction of full scale.
pub const DEFAULT_SOUND_VOLUME: f64 = 0.5;

/// Clamp a volume into `[0, 1]`. `NaN` maps to `None`.
#[must_use]
pub fn clamp_volume(volume: f64) -> Option<f64> {
    if volume.is_nan() {
        None
    } else {
        Some(volume.clamp(0.0, 1.0))
    }
}

/// The session's settings block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub sound_enabled: bool,
    /// Always within `[0, 1]`.
    pub sound_volume: f64,
    pub animation_speed: AnimationSpeed,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            theme: Theme::Default,
            sound_enabled: true,
            sound_volume: DEFAULT_SOUND_VOLUME,
            animation_speed: AnimationSpeed::Normal,
        }
    }
}

impl Settings {
    /// Apply a partial update. Unset fields keep their current value.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(enabled) = update.sound_enabled {
            self.sound_enabled = enabled;
        }
        if let Some(volume) = update.sound_volume.and_then(clamp_volume) {
            self.sound_volume = volume;
        }
        if let Some(speed) = update.animation_speed {
            self.animation_speed = speed;
        }
    }
}

/// Partial settings change. Build with the `with_*` methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub difficulty: Option<Difficulty>,
    pub theme: Option<Theme>,
    pub sound_enabled: Option<bool>,
    pub sound_volume: Option<f64>,
    pub animation_speed: Option<AnimationSpeed>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = Some(enabled);
        self
    }

    /// Volume is clamped to `[0, 1]` when applied.
    pub fn with_sound_volume(mut self, volume: f64) -> Self {
        self.sound_volume = Some(volume);
        self
    }

    pub fn with_animation_speed(mut self, speed: AnimationSpeed) -> Self {
        self.animation_speed = Some(speed);
        self
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
