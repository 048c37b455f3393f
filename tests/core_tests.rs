//! Integration tests for settings persistence and the settings-to-game path
//!
//! Verifies that stored preferences survive a save/load cycle and reach the
//! engine as rule options and clock time.

use chess_engine::{apply_move, Color, DrawReason, TerminalState};
use deskchess::core::{load_settings_from, save_settings_to, CoreError, GameSettings};
use deskchess::game::GameSession;
use std::path::PathBuf;

fn temp_settings_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("deskchess-core-tests-{}-{}", name, std::process::id()))
        .join("settings.json")
}

#[test]
fn test_settings_survive_restart() {
    //! Saving then loading yields the same preferences
    let path = temp_settings_path("restart");
    let settings = GameSettings {
        default_minutes: 25,
        fifty_move_threshold: 100,
        forbid_castling_through_check: true,
        log_filter: "debug".to_string(),
    };

    save_settings_to(&settings, &path).expect("save settings");
    let loaded = load_settings_from(&path);
    assert_eq!(loaded, settings);

    let _ = std::fs::remove_dir_all(path.parent().expect("has parent"));
}

#[test]
fn test_out_of_range_file_falls_back_to_defaults() {
    let path = temp_settings_path("range");
    let settings = GameSettings {
        default_minutes: 0,
        ..GameSettings::default()
    };
    save_settings_to(&settings, &path).expect("save settings");

    assert_eq!(load_settings_from(&path), GameSettings::default());

    let _ = std::fs::remove_dir_all(path.parent().expect("has parent"));
}

#[test]
fn test_clock_minutes_bounds() {
    for (minutes, ok) in [(0, false), (1, true), (180, true), (181, false), (-5, false)] {
        let settings = GameSettings {
            default_minutes: minutes,
            ..GameSettings::default()
        };
        assert_eq!(settings.clock_seconds().is_ok(), ok, "{minutes} minutes");
    }
}

#[test]
fn test_invalid_setting_error_names_field() {
    let settings = GameSettings {
        fifty_move_threshold: 0,
        ..GameSettings::default()
    };
    let err = settings.validate().expect_err("threshold 0 is invalid");

    assert!(matches!(err, CoreError::InvalidSetting { .. }));
    assert!(err.to_string().contains("fifty_move_threshold"));
}

#[test]
fn test_settings_reach_the_engine() {
    //! A lowered fifty-move threshold ends a knight shuffle early
    let settings = GameSettings {
        default_minutes: 1,
        fifty_move_threshold: 4,
        ..GameSettings::default()
    };
    let session = GameSession::new(
        settings.clock_seconds().expect("valid minutes"),
        settings.rule_options(),
    );
    let mut state = session.state().clone();
    assert_eq!(state.clock.remaining(Color::White), 60);

    let mut result = TerminalState::Ongoing;
    for (from, to) in [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")] {
        result = apply_move(
            &mut state,
            from.parse().expect("square"),
            to.parse().expect("square"),
        )
        .expect("legal move");
    }
    assert_eq!(result, TerminalState::Draw(DrawReason::FiftyMove));
}
