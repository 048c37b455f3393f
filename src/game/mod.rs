//! Game module - a running game around the rules engine
//!
//! - [`session`] - [`GameSession`]: state, selection and turn ownership
//! - [`selection`] - Selected square and its highlighted moves
//! - [`captured`] - Captured pieces and material balance for display
//! - [`error`] - [`GameError`]

pub mod captured;
pub mod error;
pub mod selection;
pub mod session;

pub use captured::CapturedPieces;
pub use error::{GameError, GameResult};
pub use selection::Selection;
pub use session::{ClickOutcome, GameSession};
