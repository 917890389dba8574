//! Snapshot persistence tests: restore, defaults and swallowed failures.

use rps_engine::{
    AnimationSpeed, Difficulty, GameRng, MemoryStore, Move, Session, SettingsUpdate, Snapshot,
    SnapshotStore, StoreError, Theme, SNAPSHOT_KEY,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Store shared between the session under test and the assertions.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<MemoryStore>>);

impl SnapshotStore for SharedStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.borrow().load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().save(key, value)
    }
}

impl SharedStore {
    fn saved(&self) -> Option<Snapshot> {
        let store = self.0.borrow();
        store.get(SNAPSHOT_KEY).map(|json| Snapshot::from_json(json).unwrap())
    }
}

/// Store whose every operation fails.
struct BrokenStore;

impl SnapshotStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }
}

// =============================================================================
// Save on change
// =============================================================================

#[test]
fn test_every_change_is_saved() {
    let store = SharedStore::default();
    let mut session = Session::new(42).with_store(Box::new(store.clone()));
    assert!(store.saved().is_none());

    session.play(Move::Rock).unwrap();
    assert_eq!(store.saved().unwrap().round_number, Some(1));

    session.reset_scores();
    assert_eq!(store.saved().unwrap().round_number, Some(0));

    session.clear_history();
    assert_eq!(store.saved().unwrap().game_history.map(|h| h.len()), Some(0));

    session.toggle_theme();
    assert_eq!(store.saved().unwrap().theme, Some(serde_json::Value::from("dark")));

    session.toggle_sound();
    assert_eq!(store.saved().unwrap().sound_enabled, Some(false));
}

#[test]
fn test_submit_alone_does_not_save() {
    let store = SharedStore::default();
    let mut session = Session::new(42).with_store(Box::new(store.clone()));

    session.submit_move(Move::Paper).unwrap();
    assert!(store.saved().is_none());

    session.complete_reveal().unwrap();
    assert!(store.saved().is_some());
}

#[test]
fn test_empty_settings_update_does_not_save() {
    let store = SharedStore::default();
    let mut session = Session::new(42).with_store(Box::new(store.clone()));

    session.update_settings(&SettingsUpdate::new());
    assert!(store.saved().is_none());

    session.update_settings(&SettingsUpdate::new().with_sound_enabled(false));
    assert_eq!(store.saved().unwrap().sound_enabled, Some(false));
}

// =============================================================================
// Restore
// =============================================================================

#[test]
fn test_reopen_restores_everything() {
    let store = SharedStore::default();
    {
        let mut session = Session::new(42).with_store(Box::new(store.clone()));
        session.update_settings(
            &SettingsUpdate::new()
                .with_difficulty(Difficulty::Medium)
                .with_theme(Theme::Neon)
                .with_sound_volume(0.8)
                .with_animation_speed(AnimationSpeed::Fast),
        );
        for m in [Move::Rock, Move::Paper, Move::Scissors] {
            session.play(m).unwrap();
        }
    }

    let session = Session::open(Box::new(store.clone()), GameRng::new(1));

    assert_eq!(session.state().round_number, 3);
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.settings().difficulty, Difficulty::Medium);
    assert_eq!(session.settings().theme, Theme::Neon);
    assert_eq!(session.settings().sound_volume, 0.8);
    assert_eq!(session.settings().animation_speed, AnimationSpeed::Fast);
}

#[test]
fn test_open_legacy_document() {
    let mut store = MemoryStore::new();
    store.insert(
        SNAPSHOT_KEY,
        r#"{
            "playerScore": 1,
            "computerScore": 0,
            "roundNumber": 2,
            "gameHistory": [
                {"round": 1, "playerChoice": "rock", "computerChoice": "rock", "result": "draw"},
                {"round": 2, "playerChoice": "paper", "computerChoice": "rock", "result": "win"}
            ],
            "theme": "pastel",
            "difficulty": "hard"
        }"#,
    );

    let session = Session::open(Box::new(store), GameRng::new(1));

    assert_eq!(session.state().player_score, 1);
    assert_eq!(session.state().round_number, 2);
    assert_eq!(session.stats().wins, 1);
    assert_eq!(session.stats().draws, 1);
    assert_eq!(session.settings().theme, Theme::Pastel);
    assert_eq!(session.settings().difficulty, Difficulty::Hard);
    // Missing keys take defaults
    assert!(session.settings().sound_enabled);
    assert_eq!(session.settings().sound_volume, 0.5);
    assert_eq!(session.settings().animation_speed, AnimationSpeed::Normal);
}

#[test]
fn test_open_corrupt_document_gives_default_session() {
    let mut store = MemoryStore::new();
    store.insert(SNAPSHOT_KEY, r#"{"playerScore": "lots"}"#);

    let session = Session::open(Box::new(store), GameRng::new(1));

    assert_eq!(session.state().player_score, 0);
    assert!(session.history().is_empty());
}

#[test]
fn test_open_keeps_progress_despite_bad_settings() {
    let mut store = MemoryStore::new();
    store.insert(
        SNAPSHOT_KEY,
        r#"{
            "playerScore": 7,
            "roundNumber": 9,
            "gameHistory": [
                {"round": 9, "playerChoice": "rock", "computerChoice": "paper", "result": "lose"}
            ],
            "theme": 5,
            "difficulty": "hard",
            "animationSpeed": 300,
            "soundVolume": 0.3
        }"#,
    );

    let session = Session::open(Box::new(store), GameRng::new(1));

    assert_eq!(session.state().player_score, 7);
    assert_eq!(session.state().round_number, 9);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.settings().difficulty, Difficulty::Hard);
    assert_eq!(session.settings().sound_volume, 0.3);
    assert_eq!(session.settings().theme, Theme::Default);
    assert_eq!(session.settings().animation_speed, AnimationSpeed::Normal);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_broken_store_never_blocks_play() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut session = Session::open(Box::new(BrokenStore), GameRng::new(42));
    assert_eq!(session.state().round_number, 0);

    for m in [Move::Rock, Move::Rock, Move::Paper] {
        session.play(m).unwrap();
    }
    session.update_settings(&SettingsUpdate::new().with_difficulty(Difficulty::Hard));
    session.clear_history();

    assert_eq!(session.state().round_number, 3);
    assert!(session.history().is_empty());
    assert_eq!(session.settings().difficulty, Difficulty::Hard);
}

#[test]
fn test_take_store_stops_saving() {
    let store = SharedStore::default();
    let mut session = Session::new(42).with_store(Box::new(store.clone()));

    session.play(Move::Rock).unwrap();
    assert!(session.take_store().is_some());
    session.play(Move::Rock).unwrap();

    assert_eq!(store.saved().unwrap().round_number, Some(1));
}
