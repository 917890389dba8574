//! Strategy engine tests: distributions and deterministic pattern replies.

use rps_engine::{
    choose_computer_move, Difficulty, GameRecord, GameRng, History, Move, StrategyConfig,
    StrategyEngine,
};

fn history_of(player_moves: &[Move]) -> History {
    player_moves
        .iter()
        .enumerate()
        .map(|(i, &m)| GameRecord::new(i as u32 + 1, m, Move::Rock))
        .collect()
}

fn frequencies(
    difficulty: Difficulty,
    history: &History,
    samples: usize,
    seed: u64,
) -> [f64; 3] {
    let engine = StrategyEngine::default();
    let mut rng = GameRng::new(seed);
    let mut counts = [0usize; 3];
    for _ in 0..samples {
        counts[engine.choose(difficulty, history, &mut rng).index()] += 1;
    }
    counts.map(|c| c as f64 / samples as f64)
}

// =============================================================================
// Easy
// =============================================================================

#[test]
fn test_easy_is_uniform() {
    let freqs = frequencies(Difficulty::Easy, &History::new(), 10_000, 42);

    for f in freqs {
        assert!((f - 1.0 / 3.0).abs() < 0.03, "frequency {f} too far from 1/3");
    }
}

#[test]
fn test_easy_ignores_history() {
    let history = history_of(&[Move::Rock; 20]);
    let freqs = frequencies(Difficulty::Easy, &history, 10_000, 7);

    for f in freqs {
        assert!((f - 1.0 / 3.0).abs() < 0.03);
    }
}

// =============================================================================
// Medium
// =============================================================================

#[test]
fn test_medium_counters_favourite() {
    let history = history_of(&[Move::Rock; 6]);
    let freqs = frequencies(Difficulty::Medium, &history, 20_000, 42);

    // 0.6 counter + 0.4 * 1/3 uniform fallback
    let expected_paper = 0.6 + 0.4 / 3.0;
    assert!(
        (freqs[Move::Paper.index()] - expected_paper).abs() < 0.02,
        "paper frequency {} expected ~{expected_paper}",
        freqs[Move::Paper.index()]
    );
    assert!((freqs[Move::Rock.index()] - 0.4 / 3.0).abs() < 0.02);
    assert!((freqs[Move::Scissors.index()] - 0.4 / 3.0).abs() < 0.02);
}

#[test]
fn test_medium_needs_six_rounds() {
    let history = history_of(&[Move::Rock; 5]);
    let freqs = frequencies(Difficulty::Medium, &history, 10_000, 42);

    for f in freqs {
        assert!((f - 1.0 / 3.0).abs() < 0.03);
    }
}

#[test]
fn test_medium_tie_breaks_toward_rock() {
    use Move::*;

    // Rock and Scissors tied at 3: Rock leads, so Paper is the counter
    let history = history_of(&[Scissors, Rock, Scissors, Rock, Scissors, Rock]);
    let freqs = frequencies(Difficulty::Medium, &history, 20_000, 3);

    assert!(freqs[Paper.index()] > 0.7);
}

// =============================================================================
// Hard
// =============================================================================

#[test]
fn test_hard_ascending_cycle_returns_rock() {
    use Move::*;

    let history = history_of(&[Paper, Rock, Paper, Scissors]);
    let mut rng = GameRng::new(1);
    for _ in 0..50 {
        assert_eq!(choose_computer_move(Difficulty::Hard, &history, &mut rng), Rock);
    }
}

#[test]
fn test_hard_descending_cycle_returns_scissors() {
    use Move::*;

    let history = history_of(&[Rock, Scissors, Paper, Rock]);
    let mut rng = GameRng::new(1);
    assert_eq!(choose_computer_move(Difficulty::Hard, &history, &mut rng), Scissors);
}

#[test]
fn test_hard_repeat_two_back_counters() {
    use Move::*;

    let mut rng = GameRng::new(1);
    for middle in Move::ALL {
        let history = history_of(&[Scissors, Rock, middle, Rock]);
        assert_eq!(choose_computer_move(Difficulty::Hard, &history, &mut rng), Paper);
    }
}

#[test]
fn test_hard_fallback_counters_last_move() {
    use Move::*;

    let history = history_of(&[Rock, Rock, Scissors, Paper]);
    let mut rng = GameRng::new(1);
    assert_eq!(choose_computer_move(Difficulty::Hard, &history, &mut rng), Scissors);
}

#[test]
fn test_hard_needs_four_rounds() {
    use Move::*;

    // Three rounds forming a repeat would be deterministic if Hard adapted
    let history = history_of(&[Rock, Paper, Rock]);
    let freqs = frequencies(Difficulty::Hard, &history, 10_000, 9);

    for f in freqs {
        assert!((f - 1.0 / 3.0).abs() < 0.03);
    }
}

// =============================================================================
// Determinism & tuning
// =============================================================================

#[test]
fn test_same_seed_same_choices() {
    let history = history_of(&[Move::Paper; 8]);
    let engine = StrategyEngine::default();

    let mut rng1 = GameRng::new(99);
    let mut rng2 = GameRng::new(99);

    for difficulty in Difficulty::ALL {
        let seq1: Vec<_> = (0..50).map(|_| engine.choose(difficulty, &history, &mut rng1)).collect();
        let seq2: Vec<_> = (0..50).map(|_| engine.choose(difficulty, &history, &mut rng2)).collect();
        assert_eq!(seq1, seq2);
    }
}

#[test]
fn test_custom_thresholds() {
    use Move::*;

    let engine = StrategyEngine::new(&StrategyConfig::default().with_hard_min_history(3));
    let history = history_of(&[Rock, Paper, Scissors]);
    let mut rng = GameRng::new(5);

    assert_eq!(engine.choose(Difficulty::Hard, &history, &mut rng), Rock);
}
