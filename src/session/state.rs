//! The single active game session.
//!
//! ## SessionState
//!
//! Scores, the round counter and settings. Scores and the round counter are
//! reset together, but they are independent of the history store:
//! - `reset_scores` zeroes counters and leaves history alone
//! - `clear_history` empties history and leaves counters alone
//!
//! ## Session
//!
//! Owns the state, the history store, the strategy engine, the random source
//! and the submit/reveal phase. Every state change is followed by a
//! best-effort save to the attached `SnapshotStore`, if any.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::persistence::{load_snapshot, save_snapshot, Snapshot, SnapshotStore};
use super::reveal::{PendingRound, RevealPhase, RoundReport};
use crate::core::{GameRecord, GameRng, History, Move, Settings, SettingsUpdate};
use crate::error::SessionError;
use crate::rules::Outcome;
use crate::stats::{compute_stats, Stats};
use crate::strategy::{StrategyConfig, StrategyEngine};

/// Counters and settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Rounds the player won.
    pub player_score: u32,

    /// Rounds the computer won.
    pub computer_score: u32,

    /// Last used round number (0 before the first round).
    pub round_number: u32,

    pub settings: Settings,
}

impl SessionState {
    /// Apply a resolved round to the counters.
    ///
    /// Returns the new round number.
    pub fn tally(&mut self, outcome: Outcome) -> u32 {
        self.round_number = self.round_number.saturating_add(1);
        match outcome {
            Outcome::Win => self.player_score = self.player_score.saturating_add(1),
            Outcome::Lose => self.computer_score = self.computer_score.saturating_add(1),
            Outcome::Draw => {}
        }
        self.round_number
    }

    /// Zero both scores and the round counter.
    pub fn reset_counters(&mut self) {
        self.player_score = 0;
        self.computer_score = 0;
        self.round_number = 0;
    }
}

/// A game session: state, history, opponent and persistence.
pub struct Session {
    state: SessionState,
    history: History,
    engine: StrategyEngine,
    rng: GameRng,
    phase: RevealPhase,
    store: Option<Box<dyn SnapshotStore>>,
}

impl Session {
    /// Create a fresh session with no attached store.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(SessionState::default(), History::new(), GameRng::new(seed))
    }

    /// Create a session from existing state and history.
    #[must_use]
    pub fn from_parts(state: SessionState, history: History, rng: GameRng) -> Self {
        Self {
            state,
            history,
            engine: StrategyEngine::default(),
            rng,
            phase: RevealPhase::Idle,
            store: None,
        }
    }

    /// Restore a session from `store` and keep saving to it.
    ///
    /// A missing or corrupt snapshot yields a default session.
    #[must_use]
    pub fn open(store: Box<dyn SnapshotStore>, rng: GameRng) -> Self {
        let (state, history) = load_snapshot(store.as_ref()).into_parts();
        debug!(
            "restored session: round {}, {} records",
            state.round_number,
            history.len()
        );
        let mut session = Self::from_parts(state, history, rng);
        session.store = Some(store);
        session
    }

    /// Replace the strategy tuning.
    #[must_use]
    pub fn with_strategy_config(mut self, config: &StrategyConfig) -> Self {
        self.engine = StrategyEngine::new(config);
        self
    }

    /// Attach a store without loading from it.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Detach and return the store.
    pub fn take_store(&mut self) -> Option<Box<dyn SnapshotStore>> {
        self.store.take()
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn phase(&self) -> &RevealPhase {
        &self.phase
    }

    /// Check if a round is awaiting its reveal.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Stats over the current history.
    #[must_use]
    pub fn stats(&self) -> Stats {
        compute_stats(&self.history)
    }

    /// Serializable copy of state and history.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.history)
    }

    // === Rounds ===

    /// Ask the strategy engine for the computer's move at the current difficulty.
    pub fn choose_computer_move(&mut self) -> Move {
        self.engine
            .choose(self.state.settings.difficulty, &self.history, &mut self.rng)
    }

    /// Resolve and commit a round.
    ///
    /// Increments the round counter, credits the winner, appends a record
    /// with the new round number and saves a snapshot.
    ///
    /// This bypasses the reveal gate, so it must not be called while a round
    /// is pending; use `play` or `submit_move` for gated play.
    pub fn record_round(&mut self, player: Move, computer: Move) -> Outcome {
        debug_assert!(
            !self.is_busy(),
            "record_round called while a round awaits its reveal"
        );
        let record = self.commit(player, computer);
        record.outcome
    }

    fn commit(&mut self, player: Move, computer: Move) -> GameRecord {
        let mut record = GameRecord::new(0, player, computer);
        record.round = self.state.tally(record.outcome);
        self.history.push(record);
        debug!(
            "round {}: {player} vs {computer} -> {}",
            record.round, record.outcome
        );
        self.persist();
        record
    }

    /// Lock in the player's move and the computer's reply.
    ///
    /// The round is scored by `complete_reveal`. Rejected with
    /// `SessionError::Busy` while another round is pending.
    pub fn submit_move(&mut self, player: Move) -> Result<PendingRound, SessionError> {
        if self.phase.is_busy() {
            return Err(SessionError::Busy);
        }
        let pending = PendingRound {
            player_move: player,
            computer_move: self.choose_computer_move(),
            reveal_delay: self.state.settings.animation_speed.reveal_delay(),
        };
        self.phase = RevealPhase::AwaitingReveal(pending);
        Ok(pending)
    }

    /// Score the pending round and return to idle.
    pub fn complete_reveal(&mut self) -> Result<RoundReport, SessionError> {
        let RevealPhase::AwaitingReveal(pending) = self.phase else {
            return Err(SessionError::NoPendingRound);
        };
        self.phase = RevealPhase::Idle;

        let record = self.commit(pending.player_move, pending.computer_move);
        Ok(RoundReport {
            record,
            outcome: record.outcome,
            player_score: self.state.player_score,
            computer_score: self.state.computer_score,
            round_number: self.state.round_number,
            stats: self.stats(),
        })
    }

    /// Submit and reveal in one step, for callers that do not pace the reveal.
    pub fn play(&mut self, player: Move) -> Result<RoundReport, SessionError> {
        self.submit_move(player)?;
        self.complete_reveal()
    }

    // === Commands ===

    /// Zero scores and the round counter. History is kept.
    pub fn reset_scores(&mut self) {
        self.state.reset_counters();
        info!("scores reset ({} history records kept)", self.history.len());
        self.persist();
    }

    /// Empty the history. Scores and the round counter are kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("history cleared");
        self.persist();
    }

    /// Apply a partial settings change. An empty update neither logs nor saves.
    pub fn update_settings(&mut self, update: &SettingsUpdate) {
        if update.is_empty() {
            return;
        }
        self.state.settings.apply(update);
        info!("settings updated: {:?}", self.state.settings);
        self.persist();
    }

    /// Flip between a light and a dark theme.
    pub fn toggle_theme(&mut self) {
        let theme = self.state.settings.theme.toggled();
        self.update_settings(&SettingsUpdate::new().with_theme(theme));
    }

    /// Flip sound on or off.
    pub fn toggle_sound(&mut self) {
        let enabled = !self.state.settings.sound_enabled;
        self.update_settings(&SettingsUpdate::new().with_sound_enabled(enabled));
    }

    /// Best-effort save. Failures are logged and otherwise ignored.
    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let snapshot = Snapshot::capture(&self.state, &self.history);
        if let Err(err) = save_snapshot(store.as_mut(), &snapshot) {
            warn!("snapshot save failed: {err}");
        }
    }
}
