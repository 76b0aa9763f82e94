// Integration tests for the wordle game
// These drive whole sessions through the public API, the way the front ends do

use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::NamedTempFile;
use wordle_game::commands::{run_simple, score_guess};
use wordle_game::config::GameConfig;
use wordle_game::core::{KeyState, Mark, Word};
use wordle_game::game::{Game, MAX_ATTEMPTS, Phase, Statistics, SubmitOutcome};
use wordle_game::services::{AcceptAll, FallbackWords, Services};
use wordle_game::wordlists::fallback_candidates;

fn type_word(game: &mut Game, word: &str) {
    for letter in word.chars() {
        game.add_letter(letter);
    }
}

fn temp_word_list(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_game_won_on_third_guess() {
    let mut game = Game::new(Word::new("CRANE").unwrap(), Arc::new(AcceptAll));
    assert_eq!(game.phase(), Phase::AwaitingInput);

    type_word(&mut game, "slate");
    assert_eq!(game.phase(), Phase::ReadyToSubmit);
    let SubmitOutcome::Continue(first) = game.submit() else {
        panic!("first guess should continue");
    };
    assert_eq!(first.to_string(), "--G-G");

    type_word(&mut game, "trace");
    assert!(matches!(game.submit(), SubmitOutcome::Continue(_)));

    type_word(&mut game, "crane");
    assert!(matches!(game.submit(), SubmitOutcome::Won(_)));
    assert_eq!(game.phase(), Phase::Won);

    let summary = game.summary().unwrap();
    assert!(summary.won);
    assert_eq!(summary.attempts, 3);
    assert_eq!(summary.target.text(), "CRANE");

    // Keyboard knowledge from all three guesses
    assert_eq!(game.key_state('C'), KeyState::Exact);
    assert_eq!(game.key_state('S'), KeyState::Absent);
    assert_eq!(game.key_state('Q'), KeyState::Unused);
}

#[test]
fn test_full_game_lost_reveals_target() {
    let mut game = Game::new(Word::new("WORD").unwrap(), Arc::new(AcceptAll));
    for guess in ["play", "game", "test", "look", "drow"] {
        assert!(game.revealed_target().is_none());
        type_word(&mut game, guess);
        game.submit();
    }

    assert_eq!(game.phase(), Phase::Lost);
    assert_eq!(game.revealed_target().map(Word::text), Some("WORD"));
    assert_eq!(game.verdicts().iter().flatten().count(), MAX_ATTEMPTS);

    // Finished sessions ignore further input
    game.add_letter('w');
    assert!(matches!(game.submit(), SubmitOutcome::Ignored));
}

#[test]
fn test_restart_drops_late_validation() {
    let services = Services::new(Arc::new(FallbackWords), Arc::new(AcceptAll));
    let mut game = Game::start(&services, 4);
    let generation = game.generation();

    type_word(&mut game, "word");
    let submission = game.begin_submit().unwrap();
    game.restart(services.source.as_ref());

    assert!(matches!(
        game.complete_submit(submission, true),
        SubmitOutcome::Stale
    ));
    assert_eq!(game.generation(), generation + 1);
    assert_eq!(game.attempt(), 0);
    assert!(game.verdicts().iter().all(Option::is_none));
}

#[test]
fn test_snapshot_tracks_session() {
    let mut game = Game::new(Word::new("GAMES").unwrap(), Arc::new(AcceptAll));
    type_word(&mut game, "tests");
    game.submit();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.word_length, 5);
    assert_eq!(snapshot.attempt, 1);
    assert_eq!(snapshot.guesses[0], "TESTS");
    assert_eq!(snapshot.exact, vec!['S']);
    assert_eq!(snapshot.absent, vec!['T']);
    assert!(!snapshot.finished);
    assert_eq!(
        snapshot.verdicts[0].as_ref().map(|v| v.marks()[1]),
        Some(Mark::Elsewhere)
    );
    assert_eq!(snapshot.elsewhere, vec!['E']);
}

#[test]
fn test_offline_config_uses_fallback_table() {
    for length in 4..=6 {
        let services = GameConfig::offline(length).build_services().unwrap();
        let target = services.source.fetch(length);
        assert_eq!(target.len(), length);
        assert!(fallback_candidates(length).contains(&target.text()));
        assert!(services.validator.check("zzzz", &target));
    }
}

#[test]
fn test_config_rejects_unsupported_length() {
    assert!(GameConfig::offline(3).build_services().is_err());
    assert!(GameConfig::offline(7).build_services().is_err());
}

#[test]
fn test_word_list_config_drives_simple_mode() {
    let list = temp_word_list("# targets\nplant\ntoo\n");
    let config = GameConfig {
        word_list: Some(list.path().to_path_buf()),
        ..GameConfig::offline(5)
    };
    let services = config.build_services().unwrap();

    // Miss once, win, play again, win first try, stop
    let input = "crane\nplant\ny\nplant\nn\n";
    let stats = run_simple(&services, config.word_length, Cursor::new(input)).unwrap();

    let expected = Statistics {
        total_games: 2,
        games_won: 2,
        guess_distribution: [0, 1, 1, 0, 0, 0],
    };
    assert_eq!(stats, expected);
}

#[test]
fn test_missing_word_list_is_an_error() {
    let config = GameConfig {
        word_list: Some(PathBuf::from("/nonexistent/wordle_game/words.txt")),
        ..GameConfig::offline(5)
    };
    assert!(config.build_services().is_err());
}

#[test]
fn test_score_matches_game_verdict() {
    let result = score_guess("robot", "floor").unwrap();

    let mut game = Game::new(Word::new("floor").unwrap(), Arc::new(AcceptAll));
    type_word(&mut game, "robot");
    let SubmitOutcome::Continue(verdict) = game.submit() else {
        panic!("guess should continue");
    };
    assert_eq!(result.verdict, verdict);
    assert_eq!(verdict.to_string(), "YY-G-");
}
