//! Text rendering of the board, clocks and move list
//!
//! Layout is White at the bottom: row 0 (rank 8) is printed first. Pieces use
//! their letter, uppercase for White and lowercase for Black; `.` is an empty
//! square. The selected piece is wrapped in `[ ]` and its destinations in `( )`.
//! Moves are listed in coordinate form (`e2e4`).

use crate::game::{CapturedPieces, GameSession, Selection};
use chess_engine::constants::BOARD_SIZE;
use chess_engine::{is_in_check, GameState, MoveRecord, Square};
use std::fmt::Write;

/// Render the board with the current selection highlighted
pub fn render_board(state: &GameState, selection: &Selection) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{} ", BOARD_SIZE - row);
        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            let symbol = state.board.get(square).map_or('.', |p| p.symbol());
            let cell = if selection.selected_square == Some(square) {
                format!("[{}]", symbol)
            } else if selection.is_target(square) {
                format!("({})", symbol)
            } else {
                format!(" {} ", symbol)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

/// Format time in seconds to MM:SS format
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", minutes, secs)
}

/// One-line summary: side to move (or result), both clocks, material balance
pub fn render_status(session: &GameSession) -> String {
    let state = session.state();
    let white = format_time(state.clock.white_remaining);
    let black = format_time(state.clock.black_remaining);

    let headline = if session.is_game_over() {
        state.status.message().to_string()
    } else if is_in_check(state, state.current_player) {
        format!("{} to move (check)", state.current_player)
    } else {
        format!("{} to move", state.current_player)
    };

    let advantage = CapturedPieces::from_history(&state.history).material_advantage();
    let material = match advantage {
        0 => String::new(),
        a if a > 0 => format!(" | white +{}", a),
        a => format!(" | black +{}", -a),
    };

    format!("{headline} | white {white} black {black}{material}")
}

/// Numbered move list in coordinate form, one full move per line
///
/// A promotion is marked with `=Q`.
pub fn render_move_list(state: &GameState) -> String {
    let mut out = String::new();
    for (index, record) in state.history.iter().enumerate() {
        let text = record_text(record);
        if index % 2 == 0 {
            let _ = write!(out, "{}. {}", index / 2 + 1, text);
        } else {
            let _ = writeln!(out, " {}", text);
        }
    }
    if state.history.len() % 2 == 1 {
        out.push('\n');
    }
    out
}

fn record_text(record: &MoveRecord) -> String {
    let promotion = if record.promoted { "=Q" } else { "" };
    format!("{}{}{}", record.from, record.to, promotion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::{apply_move, new_game, RuleOptions};

    fn play(state: &mut GameState, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            apply_move(
                state,
                from.parse().expect("square"),
                to.parse().expect("square"),
            )
            .expect("legal move");
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(0), "00:00");
    }

    #[test]
    fn test_render_initial_board() {
        let state = new_game(300);
        let text = render_board(&state, &Selection::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r  n  b  q  k  b  n  r ");
        assert_eq!(lines[7], "1  R  N  B  Q  K  B  N  R ");
    }

    #[test]
    fn test_render_marks_selection() {
        let mut session = GameSession::new(300, RuleOptions::default());
        session.click("e2".parse().expect("square"));
        let text = render_board(session.state(), session.selection());

        assert!(text.contains("[P]"));
        assert_eq!(text.matches("(.)").count(), 2);
    }

    #[test]
    fn test_move_list_in_coordinates() {
        let mut state = new_game(300);
        play(
            &mut state,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );

        assert_eq!(render_move_list(&state), "1. f2f3 e7e5\n2. g2g4 d8h4\n");
    }

    #[test]
    fn test_move_list_odd_length() {
        let mut state = new_game(300);
        play(&mut state, &[("e2", "e4")]);

        assert_eq!(render_move_list(&state), "1. e2e4\n");
    }
}
