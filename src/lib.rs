//! Terminal chess built on the `chess_engine` rules crate
//!
//! - [`core`] - Settings and their persistence
//! - [`game`] - Game session: selection, clicks, clock, resignation
//! - [`networking`] - Move-exchange messages for networked play
//! - [`ui`] - Text rendering and command parsing

pub mod core;
pub mod game;
pub mod networking;
pub mod ui;
