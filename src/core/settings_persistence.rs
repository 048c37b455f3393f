//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so preferences survive
//! between sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the platform configuration
//! directory (via `directories`), or in the working directory when no such
//! directory can be determined.
//!
//! # Error Handling
//!
//! - Load failures (missing, unreadable or invalid file) fall back to defaults
//! - Save failures are returned to the caller, which logs them

use crate::core::error::{CoreError, CoreResult};
use chess_engine::constants::DEFAULT_FIFTY_MOVE_THRESHOLD;
use chess_engine::{validate_clock_minutes, RuleOptions};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences for new games
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Time per side in minutes for new games
    pub default_minutes: i64,
    /// Half-move clock value that draws the game
    pub fifty_move_threshold: u32,
    /// Reject castling out of, through or into check
    pub forbid_castling_through_check: bool,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_minutes: 10,
            fifty_move_threshold: DEFAULT_FIFTY_MOVE_THRESHOLD,
            forbid_castling_through_check: false,
            log_filter: "info".to_string(),
        }
    }
}

impl GameSettings {
    /// Rule options for the engine
    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            fifty_move_threshold: self.fifty_move_threshold,
            forbid_castling_through_check: self.forbid_castling_through_check,
        }
    }

    /// Per-side clock in seconds, validated against the engine's range
    pub fn clock_seconds(&self) -> CoreResult<u32> {
        validate_clock_minutes(self.default_minutes).map_err(|e| CoreError::InvalidSetting {
            name: "default_minutes",
            message: e.to_string(),
        })
    }

    /// Check every field can start a game
    pub fn validate(&self) -> CoreResult<()> {
        self.clock_seconds()?;
        if self.fifty_move_threshold == 0 {
            return Err(CoreError::InvalidSetting {
                name: "fifty_move_threshold",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Resolve the settings file path
///
/// E.g. `~/.config/deskchess/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "deskchess", "deskchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from the default location
pub fn load_settings() -> GameSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, using defaults if the file is missing or invalid
pub fn load_settings_from(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Save settings to the default location
pub fn save_settings(settings: &GameSettings) -> CoreResult<()> {
    save_settings_to(settings, &settings_path())
}

/// Save settings to `path`, creating its parent directory if needed
pub fn save_settings_to(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("deskchess-settings-{}-{}", name, std::process::id()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.clock_seconds().expect("valid"), 600);
        assert_eq!(settings.rule_options(), RuleOptions::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_settings_path("roundtrip");
        let settings = GameSettings {
            default_minutes: 3,
            forbid_castling_through_check: true,
            ..GameSettings::default()
        };

        save_settings_to(&settings, &path).expect("save settings");
        assert_eq!(load_settings_from(&path), settings);

        let _ = fs::remove_dir_all(path.parent().expect("has parent"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = temp_settings_path("missing");
        assert_eq!(load_settings_from(&path), GameSettings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let path = temp_settings_path("invalid");
        fs::create_dir_all(path.parent().expect("has parent")).expect("create dir");
        fs::write(&path, "{ not json").expect("write file");

        assert_eq!(load_settings_from(&path), GameSettings::default());

        let _ = fs::remove_dir_all(path.parent().expect("has parent"));
    }

    #[test]
    fn test_out_of_range_minutes_rejected() {
        let settings = GameSettings {
            default_minutes: 181,
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSetting {
                name: "default_minutes",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{ "default_minutes": 5 }"#).expect("parse");
        assert_eq!(settings.default_minutes, 5);
        assert_eq!(settings.fifty_move_threshold, DEFAULT_FIFTY_MOVE_THRESHOLD);
    }
}
