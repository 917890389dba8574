//! Computer move selection.
//!
//! Each difficulty is a `Strategy`: a function of the player's history and an
//! injected random source. Strategies read only the player's side of the
//! history; the computer's own past moves are never consulted.
//!
//! - `RandomStrategy` (Easy): uniform draw
//! - `FrequencyStrategy` (Medium): counter the player's most frequent move
//! - `PatternStrategy` (Hard): detect repetition and cycling over the last 3 moves

use log::debug;

use crate::core::{Difficulty, GameRng, History, Move};

use super::config::StrategyConfig;

/// Picks the computer's next move.
pub trait Strategy: Send + Sync {
    /// Choose a move given the player's history so far.
    fn choose(&self, history: &History, rng: &mut GameRng) -> Move;
}

// =============================================================================
// Easy
// =============================================================================

/// Uniform random opponent. Ignores history entirely.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose(&self, _history: &History, rng: &mut GameRng) -> Move {
        rng.uniform_move()
    }
}

// =============================================================================
// Medium
// =============================================================================

/// Counters the player's most frequent move some of the time.
///
/// With fewer than `min_history` rounds this plays like `RandomStrategy`.
#[derive(Clone, Debug)]
pub struct FrequencyStrategy {
    pub min_history: usize,
    pub counter_probability: f64,
}

impl FrequencyStrategy {
    #[must_use]
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            min_history: config.medium_min_history,
            counter_probability: config.medium_counter_probability,
        }
    }
}

impl Default for FrequencyStrategy {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}

impl Strategy for FrequencyStrategy {
    fn choose(&self, history: &History, rng: &mut GameRng) -> Move {
        if history.len() < self.min_history {
            return rng.uniform_move();
        }

        let favourite = most_frequent_player_move(history);
        if rng.gen_bool(self.counter_probability) {
            let chosen = favourite.counter();
            debug!("medium: countering favourite {favourite} with {chosen}");
            chosen
        } else {
            rng.uniform_move()
        }
    }
}

/// The player's most frequent move over the whole history.
///
/// Ties go to the earliest move in `Move::ALL` order: a later move only takes
/// the lead with a strictly greater count. An empty history yields `Rock`.
#[must_use]
pub fn most_frequent_player_move(history: &History) -> Move {
    let counts = history.player_move_counts();
    let mut leader = Move::Rock;
    for m in Move::ALL {
        if counts[m.index()] > counts[leader.index()] {
            leader = m;
        }
    }
    leader
}

// =============================================================================
// Hard
// =============================================================================

/// Looks for low-order patterns in the player's last three moves.
///
/// With the last three player moves `[a, b, c]` (c most recent):
/// 1. `a == c`: assume the player repeats `c`, play `counter(c)`
/// 2. `[Rock, Paper, Scissors]`: play `Rock`
/// 3. `[Scissors, Paper, Rock]`: play `Scissors`
/// 4. otherwise play `counter(c)`
///
/// The cycle branches return those fixed moves as-is; they are not derived
/// from a counter-the-prediction rule.
///
/// With fewer than `min_history` rounds this plays like `RandomStrategy`.
#[derive(Clone, Debug)]
pub struct PatternStrategy {
    pub min_history: usize,
}

/// Length of the window `PatternStrategy` inspects.
pub const PATTERN_WINDOW: usize = 3;

impl PatternStrategy {
    #[must_use]
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            min_history: config.hard_min_history,
        }
    }

    /// The deterministic reply to a full window of player moves.
    #[must_use]
    pub fn reply(window: [Move; PATTERN_WINDOW]) -> Move {
        use Move::*;

        match window {
            [a, _, c] if a == c => c.counter(),
            [Rock, Paper, Scissors] => Rock,
            [Scissors, Paper, Rock] => Scissors,
            [_, _, c] => c.counter(),
        }
    }
}

impl Default for PatternStrategy {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}

impl Strategy for PatternStrategy {
    fn choose(&self, history: &History, rng: &mut GameRng) -> Move {
        if history.len() < self.min_history {
            return rng.uniform_move();
        }

        let last = history.last_player_moves(PATTERN_WINDOW);
        match <[Move; PATTERN_WINDOW]>::try_from(last.as_slice()) {
            Ok(window) => {
                let chosen = Self::reply(window);
                debug!("hard: window {window:?} -> {chosen}");
                chosen
            }
            // Only reachable when `min_history` is configured below the window
            Err(_) => rng.uniform_move(),
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// The difficulty-tiered decision engine.
///
/// Holds one configured strategy per difficulty and dispatches on the
/// session's current setting.
#[derive(Clone, Debug, Default)]
pub struct StrategyEngine {
    easy: RandomStrategy,
    medium: FrequencyStrategy,
    hard: PatternStrategy,
}

impl StrategyEngine {
    #[must_use]
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            easy: RandomStrategy,
            medium: FrequencyStrategy::new(config),
            hard: PatternStrategy::new(config),
        }
    }

    /// The strategy used at `difficulty`.
    #[must_use]
    pub fn strategy(&self, difficulty: Difficulty) -> &dyn Strategy {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Pick the computer's move for `difficulty`.
    pub fn choose(&self, difficulty: Difficulty, history: &History, rng: &mut GameRng) -> Move {
        let chosen = self.strategy(difficulty).choose(history, rng);
        debug!(
            "computer chose {chosen} at {difficulty} after {} rounds",
            history.len()
        );
        chosen
    }
}

/// Pick the computer's move with the default tuning.
pub fn choose_computer_move(difficulty: Difficulty, history: &History, rng: &mut GameRng) -> Move {
    StrategyEngine::default().choose(difficulty, history, rng)
}
