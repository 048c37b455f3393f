//! Player input parsing
//!
//! One command per line:
//!
//! - `e2` - click a square (select, reselect, move or clear)
//! - `e2e4` or `e2 e4` - play a move directly
//! - `resign`, `board`, `moves`, `help`, `quit`

use chess_engine::Square;

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    Move { from: Square, to: Square },
    Resign,
    Board,
    Moves,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  e2        click a square (select a piece, then click a destination)
  e2e4      play a move
  resign    resign the game
  board     show the board
  moves     show the move list
  help      show this help
  quit      leave";

/// Parse one line of input
pub fn parse_command(line: &str) -> Command {
    let text = line.trim().to_ascii_lowercase();
    match text.as_str() {
        "resign" => return Command::Resign,
        "board" | "b" => return Command::Board,
        "moves" | "m" => return Command::Moves,
        "help" | "h" | "?" => return Command::Help,
        "quit" | "q" | "exit" => return Command::Quit,
        _ => {}
    }

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.is_ascii() {
        return Command::Unknown(text);
    }
    match compact.len() {
        2 => compact
            .parse()
            .map(Command::Click)
            .unwrap_or(Command::Unknown(text)),
        4 => match (compact[..2].parse(), compact[2..].parse()) {
            (Ok(from), Ok(to)) => Command::Move { from, to },
            _ => Command::Unknown(text),
        },
        _ => Command::Unknown(text),
    }
}
