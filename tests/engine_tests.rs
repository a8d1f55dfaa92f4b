//! Round engine integration tests.
//!
//! These drive `RoundEngine` through whole rounds: guesses, the reveal
//! delay, advancement, loss and restart.

use higher_lower::core::{Catalog, City, CityId, EngineConfig, EngineError};
use higher_lower::rules::{Advancement, Guess, GuessOutcome, RoundEngine, RoundStatus};
use higher_lower::selection::Pair;
use higher_lower::store::{MemoryStore, ScoreStore};

const DELAY: u64 = 1200;
const KEY: &str = "higherOrLowerHighScore";

fn catalog(populations: &[u64]) -> Catalog {
    Catalog::new(
        populations
            .iter()
            .enumerate()
            .map(|(i, &p)| City::new(format!("City {}", i), "Testland", p)),
    )
    .unwrap()
}

fn new_engine(populations: &[u64], store: MemoryStore) -> RoundEngine<MemoryStore> {
    RoundEngine::initialize(catalog(populations), store, EngineConfig::default()).unwrap()
}

/// Restart until the engine shows `pair`.
fn force_pair(engine: &mut RoundEngine<MemoryStore>, pair: Pair) {
    for _ in 0..1000 {
        if engine.state().pair == pair {
            return;
        }
        engine.restart().unwrap();
    }
    panic!("never drew {}", pair);
}

fn pair(revealed: u32, hidden: u32) -> Pair {
    Pair::new(CityId::new(revealed), CityId::new(hidden))
}

fn right_guess(engine: &RoundEngine<MemoryStore>) -> Guess {
    let pair = engine.state().pair;
    let catalog = engine.catalog();
    if catalog[pair.hidden].population > catalog[pair.revealed].population {
        Guess::Higher
    } else {
        Guess::Lower
    }
}

fn wrong_guess(engine: &RoundEngine<MemoryStore>) -> Guess {
    match right_guess(engine) {
        Guess::Higher => Guess::Lower,
        Guess::Lower => Guess::Higher,
    }
}

/// Submit a guess and let the delay elapse.
fn play(engine: &mut RoundEngine<MemoryStore>, guess: Guess) -> Option<Advancement> {
    engine.submit_guess(guess);
    engine.tick(engine.now_ms() + DELAY).unwrap()
}

/// Score `n` points in a row.
fn score_points(engine: &mut RoundEngine<MemoryStore>, n: u32) {
    for _ in 0..n {
        let guess = right_guess(engine);
        assert!(matches!(play(engine, guess), Some(Advancement::Advanced { .. })));
    }
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_initialize_reads_best_score() {
    let engine = new_engine(&[1, 2, 3], MemoryStore::with_value(KEY, 17));
    assert_eq!(engine.state().best_score, 17);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().status, RoundStatus::Playing);
}

#[test]
fn test_initialize_with_unavailable_store() {
    let engine = new_engine(&[1, 2, 3], MemoryStore::unavailable());
    assert_eq!(engine.state().best_score, 0);
    assert_eq!(engine.state().status, RoundStatus::Playing);
}

#[test]
fn test_initialize_rejects_short_catalog() {
    let err = RoundEngine::from_cities(Vec::new(), MemoryStore::new(), EngineConfig::default()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidCatalog { len: 0 }));
}

#[test]
fn test_same_seed_same_game() {
    let config = EngineConfig::default().with_seed(99);
    let mut a = RoundEngine::initialize(catalog(&[1, 2, 3, 4, 5]), MemoryStore::new(), config.clone()).unwrap();
    let mut b = RoundEngine::initialize(catalog(&[1, 2, 3, 4, 5]), MemoryStore::new(), config).unwrap();

    for _ in 0..10 {
        assert_eq!(a.state().pair, b.state().pair);
        let guess = right_guess(&a);
        play(&mut a, guess);
        play(&mut b, guess);
    }
}

// =============================================================================
// Reference scenarios
// =============================================================================

/// Populations [100, 50, 200], pair (0, 1), Lower: correct, then the
/// hidden city is revealed and a new one drawn.
#[test]
fn test_scenario_correct_lower() {
    let mut engine = new_engine(&[100, 50, 200], MemoryStore::new());
    force_pair(&mut engine, pair(0, 1));

    let outcome = engine.submit_guess(Guess::Lower);
    assert_eq!(outcome.correct(), Some(true));
    assert_eq!(engine.state().status, RoundStatus::Resolving);

    let advanced = engine.tick(engine.now_ms() + DELAY).unwrap().unwrap();
    let state = engine.state();
    assert_eq!(state.score, 1);
    assert_eq!(state.status, RoundStatus::Playing);
    assert_eq!(state.pair.revealed, CityId::new(1));
    assert!(state.pair.hidden == CityId::new(0) || state.pair.hidden == CityId::new(2));
    assert_eq!(advanced, Advancement::Advanced { pair: state.pair, score: 1 });
}

/// Same catalog, pair (0, 2), Lower: wrong, round lost at 0.
#[test]
fn test_scenario_wrong_lower() {
    let mut engine = new_engine(&[100, 50, 200], MemoryStore::new());
    force_pair(&mut engine, pair(0, 2));

    assert_eq!(engine.submit_guess(Guess::Lower).correct(), Some(false));
    let lost = engine.tick(engine.now_ms() + DELAY).unwrap().unwrap();

    assert_eq!(lost, Advancement::Lost { score: 0, new_best: false });
    assert_eq!(engine.state().status, RoundStatus::Lost);
    assert_eq!(engine.state().score, 0);
}

// =============================================================================
// Guess handling
// =============================================================================

#[test]
fn test_equal_populations_always_wrong() {
    for guess in [Guess::Higher, Guess::Lower] {
        let mut engine = new_engine(&[500, 500], MemoryStore::new());
        assert_eq!(engine.submit_guess(guess).correct(), Some(false));
        assert!(matches!(
            engine.tick(DELAY).unwrap(),
            Some(Advancement::Lost { score: 0, .. })
        ));
    }
}

#[test]
fn test_guess_ignored_while_resolving() {
    let mut engine = new_engine(&[1, 2, 3], MemoryStore::new());
    engine.submit_guess(Guess::Higher);
    let before = engine.state().clone();
    let due = engine.pending_due_at();

    assert_eq!(engine.submit_guess(Guess::Lower), GuessOutcome::Ignored);
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.pending_due_at(), due);
}

#[test]
fn test_guess_ignored_after_loss() {
    let mut engine = new_engine(&[1, 2, 3], MemoryStore::new());
    let guess = wrong_guess(&engine);
    play(&mut engine, guess);
    let before = engine.state().clone();

    assert_eq!(engine.submit_guess(Guess::Higher), GuessOutcome::Ignored);
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.pending_due_at(), None);
}

#[test]
fn test_advancement_waits_for_delay() {
    let mut engine = new_engine(&[1, 2, 3], MemoryStore::new());
    engine.tick(100).unwrap();
    let guess = right_guess(&engine);
    engine.submit_guess(guess);
    assert_eq!(engine.pending_due_at(), Some(100 + DELAY));

    assert_eq!(engine.tick(100 + DELAY - 1).unwrap(), None);
    assert_eq!(engine.state().status, RoundStatus::Resolving);
    assert_eq!(engine.state().score, 0);

    assert!(engine.tick(100 + DELAY).unwrap().is_some());
    assert_eq!(engine.state().score, 1);
}

#[test]
fn test_advancement_runs_once() {
    let mut engine = new_engine(&[1, 2, 3], MemoryStore::new());
    let guess = right_guess(&engine);
    play(&mut engine, guess);
    let after = engine.state().clone();

    assert_eq!(engine.tick(engine.now_ms() + 10 * DELAY).unwrap(), None);
    assert_eq!(engine.state(), &after);
}

#[test]
fn test_correct_guess_slides_hidden_to_revealed() {
    let mut engine = new_engine(&[10, 20, 30, 40, 50, 60], MemoryStore::new());
    for expected_score in 1..=20 {
        let old = engine.state().pair;
        let guess = right_guess(&engine);
        play(&mut engine, guess);

        let state = engine.state();
        assert_eq!(state.pair.revealed, old.hidden);
        assert_ne!(state.pair.hidden, state.pair.revealed);
        assert_eq!(state.score, expected_score);
        assert_eq!(state.last_guess_correct, Some(true));
    }
}

#[test]
fn test_wrong_guess_freezes_score() {
    let mut engine = new_engine(&[10, 20, 30, 40], MemoryStore::new());
    score_points(&mut engine, 3);

    let guess = wrong_guess(&engine);
    play(&mut engine, guess);

    assert_eq!(engine.state().status, RoundStatus::Lost);
    assert_eq!(engine.state().score, 3);
}

// =============================================================================
// Best score
// =============================================================================

#[test]
fn test_best_score_written_on_improvement() {
    let mut engine = new_engine(&[10, 20, 30, 40], MemoryStore::with_value(KEY, 2));
    score_points(&mut engine, 3);

    let guess = wrong_guess(&engine);
    assert_eq!(play(&mut engine, guess), Some(Advancement::Lost { score: 3, new_best: true }));

    assert_eq!(engine.state().best_score, 3);
    assert_eq!(engine.store().get(KEY).unwrap(), Some(3));
    assert_eq!(engine.store().writes(), 1);
}

#[test]
fn test_best_score_tie_does_not_write() {
    let mut engine = new_engine(&[10, 20, 30, 40], MemoryStore::with_value(KEY, 2));
    score_points(&mut engine, 2);

    let guess = wrong_guess(&engine);
    assert_eq!(play(&mut engine, guess), Some(Advancement::Lost { score: 2, new_best: false }));

    assert_eq!(engine.state().best_score, 2);
    assert_eq!(engine.store().writes(), 0);
}

#[test]
fn test_best_score_not_written_mid_round() {
    let mut engine = new_engine(&[10, 20, 30, 40], MemoryStore::new());
    score_points(&mut engine, 5);

    assert_eq!(engine.state().best_score, 0);
    assert_eq!(engine.store().writes(), 0);
}

#[test]
fn test_best_score_kept_in_memory_when_store_fails() {
    let mut engine = new_engine(&[10, 20, 30, 40], MemoryStore::unavailable());
    score_points(&mut engine, 4);
    let guess = wrong_guess(&engine);
    play(&mut engine, guess);

    assert_eq!(engine.state().best_score, 4);
    engine.restart().unwrap();
    assert_eq!(engine.state().best_score, 4);
}

// =============================================================================
// Restart
// =============================================================================

#[test]
fn test_restart_after_loss() {
    let mut engine = new_engine(&[10, 20, 30, 40], MemoryStore::new());
    score_points(&mut engine, 2);
    let guess = wrong_guess(&engine);
    play(&mut engine, guess);

    engine.restart().unwrap();
    let state = engine.state();
    assert_eq!(state.status, RoundStatus::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.best_score, 2);
    assert_eq!(state.last_guess_correct, None);
}

#[test]
fn test_restart_from_any_status() {
    let mut engine = new_engine(&[10, 20, 30], MemoryStore::with_value(KEY, 9));

    engine.restart().unwrap();
    assert_eq!(engine.state().status, RoundStatus::Playing);

    engine.submit_guess(Guess::Higher);
    engine.restart().unwrap();
    assert_eq!(engine.state().status, RoundStatus::Playing);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().best_score, 9);
    assert_eq!(engine.pending_due_at(), None);
}

/// A guess pending at restart must not touch the new round.
#[test]
fn test_restart_suppresses_pending_advancement() {
    let mut engine = new_engine(&[10, 20, 30, 40], MemoryStore::new());
    score_points(&mut engine, 2);

    let guess = wrong_guess(&engine);
    engine.submit_guess(guess);
    engine.restart().unwrap();
    let fresh = engine.state().clone();

    assert_eq!(engine.tick(engine.now_ms() + DELAY).unwrap(), None);
    assert_eq!(engine.state(), &fresh);
    assert_eq!(engine.store().writes(), 0);

    // The new round still plays normally.
    let guess = right_guess(&engine);
    assert!(matches!(
        play(&mut engine, guess),
        Some(Advancement::Advanced { score: 1, .. })
    ));
}

// =============================================================================
// View
// =============================================================================

#[test]
fn test_view_follows_round() {
    let mut engine = new_engine(&[100, 50, 200], MemoryStore::new());
    force_pair(&mut engine, pair(0, 2));

    let view = engine.view();
    assert_eq!(view.revealed.population, Some(100));
    assert_eq!(view.hidden.population, None);
    assert!(view.accepts_guess());

    engine.submit_guess(Guess::Lower);
    let view = engine.view();
    assert_eq!(view.hidden.population, Some(200));
    assert!(view.highlight_hidden);
    assert!(!view.accepts_guess());

    engine.tick(engine.now_ms() + DELAY).unwrap();
    let view = engine.view();
    assert!(view.can_restart());
    assert!(!view.highlight_hidden);
}
