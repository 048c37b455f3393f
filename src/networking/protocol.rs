//! Move-exchange protocol for networked play
//!
//! Peers exchange [`GameMessage`]s. A move is sent as its two squares only;
//! the receiver resolves special moves with its own engine, so both boards
//! stay identical as long as both sides apply the same sequence.
//!
//! Messages are encoded with `bincode`.

use crate::game::error::GameResult;
use chess_engine::{Color, Square, TerminalState};
use serde::{Deserialize, Serialize};

/// In-game messages
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMessage {
    /// A move accepted by the sender's engine
    MoveMade { from: Square, to: Square },
    /// The sender's player resigned
    Resign { color: Color },
    /// The sender's view of how the game ended
    GameEnd { status: TerminalState },
}

/// Encode a message for the wire
pub fn encode(message: &GameMessage) -> GameResult<Vec<u8>> {
    Ok(bincode::serialize(message)?)
}

/// Decode a message received from the wire
pub fn decode(bytes: &[u8]) -> GameResult<GameMessage> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;

    #[test]
    fn test_move_made_serialization() {
        let msg = GameMessage::MoveMade {
            from: Square::new(6, 4),
            to: Square::new(4, 4),
        };
        let bytes = encode(&msg).expect("Should serialize");
        let decoded = decode(&bytes).expect("Should deserialize");

        match decoded {
            GameMessage::MoveMade { from, to } => {
                assert_eq!(from.to_string(), "e2");
                assert_eq!(to.to_string(), "e4");
            }
            _ => panic!("Wrong message type after deserialization"),
        }
    }

    #[test]
    fn test_game_end_carries_winner() {
        let msg = GameMessage::GameEnd {
            status: TerminalState::Checkmate {
                winner: Color::Black,
            },
        };
        let decoded = decode(&encode(&msg).expect("Should serialize")).expect("Should deserialize");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = encode(&GameMessage::Resign {
            color: Color::White,
        })
        .expect("Should serialize");

        let result = decode(&bytes[..bytes.len() - 1]);
        assert!(matches!(result, Err(GameError::Codec(_))));
    }
}
