use std::fs;

use puzzle_core::{CellIndex, MatchOutcome, PuzzleConfig, PuzzleState};
use puzzle_runtime::{EventLog, NullSink, PuzzleEvent, SessionSources};

const PUZZLE: &str = r#"(
    layout: Placements(
        width: 4,
        height: 4,
        filler: 'Q',
        placements: [
            (origin: (x: 0, y: 0), direction: East, word: "WORD"),
            (origin: (x: 0, y: 0), direction: SouthEast, word: "WAVE"),
        ],
    ),
)"#;

#[test]
fn session_from_placements_uses_placed_words() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = dir.path().join("puzzle.ron");
    fs::write(&puzzle, PUZZLE).unwrap();

    let mut controller = SessionSources::new(&puzzle).build(EventLog::new()).unwrap();
    assert_eq!(
        controller.state().grid.to_string(),
        "WORD\nQAQQ\nQQVQ\nQQQE"
    );
    assert_eq!(controller.state().words.len(), 2);

    controller.press(CellIndex(0));
    controller.enter(CellIndex(15));
    let resolution = controller.release().unwrap().unwrap();
    assert!(matches!(resolution.outcome, MatchOutcome::Solved(ref word) if word.text == "WAVE"));
    assert_eq!(controller.state().remaining(), 1);
}

#[test]
fn word_list_and_config_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = dir.path().join("puzzle.ron");
    let words = dir.path().join("words.list");
    let config = dir.path().join("puzzle.toml");
    fs::write(&puzzle, PUZZLE).unwrap();
    fs::write(&words, "  WORD\n\nAQ\n").unwrap();
    fs::write(&config, "seed = 7\nsolved_alpha = 96\n").unwrap();

    let sources = SessionSources::new(&puzzle).words(&words).config(&config);
    let state = sources.load_state().unwrap();
    let texts: Vec<&str> = state.words.entries().iter().map(|entry| entry.text()).collect();
    assert_eq!(texts, vec!["WORD", "AQ"]);
    assert_eq!(state.solved_alpha, 96);

    let expected = PuzzleState::with_words(
        state.grid.clone(),
        ["WORD", "AQ"],
        &PuzzleConfig::default().with_seed(7),
    )
    .unwrap();
    assert_eq!(state.words.pool(), expected.words.pool());
}

#[test]
fn finishing_a_loaded_session_emits_one_signal() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = dir.path().join("puzzle.ron");
    fs::write(
        &puzzle,
        r#"(layout: Rows(["CAT", "QQQ"]), words: ["CAT"])"#,
    )
    .unwrap();

    let mut controller = SessionSources::new(&puzzle).build(EventLog::new()).unwrap();
    controller.press(CellIndex(0));
    controller.enter(CellIndex(2));
    controller.release().unwrap();

    let finished = controller
        .sink()
        .events()
        .iter()
        .filter(|event| **event == PuzzleEvent::GameFinished)
        .count();
    assert_eq!(finished, 1);
}

#[test]
fn headless_session_runs_with_null_sink() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = dir.path().join("puzzle.ron");
    fs::write(&puzzle, r#"(layout: Rows(["AB"]), words: ["AB"])"#).unwrap();

    let mut controller = SessionSources::new(&puzzle).build(NullSink).unwrap();
    controller.press(CellIndex(0));
    controller.enter(CellIndex(1));
    assert!(controller.release().unwrap().unwrap().completed);
}

#[test]
fn missing_puzzle_file_is_reported() {
    let error = SessionSources::new("/nonexistent/puzzle.ron")
        .load_state()
        .unwrap_err();
    assert!(error.to_string().contains("/nonexistent/puzzle.ron"));
}

#[test]
fn invalid_grid_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = dir.path().join("puzzle.ron");
    fs::write(&puzzle, r#"(layout: Rows(["AB", "C"]), words: ["AB"])"#).unwrap();

    let error = SessionSources::new(&puzzle).load_state().unwrap_err();
    assert!(error.to_string().contains("Invalid puzzle grid"));
}
