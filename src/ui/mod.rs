//! UI module - terminal front end
//!
//! - **text_board**: board, clocks, result line and move list as plain text
//! - **command**: parsing of the lines typed by the player

pub mod command;
pub mod text_board;

pub use command::{parse_command, Command};
pub use text_board::{format_time, render_board, render_move_list, render_status};
