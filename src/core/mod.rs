//! Core module - application infrastructure
//!
//! Everything the game needs before a board exists:
//!
//! - [`GameSettings`] - User preferences for new games, persisted as JSON
//! - [`CoreError`] - Errors from loading, saving and validating settings

pub mod error;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings_persistence::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
    GameSettings,
};
