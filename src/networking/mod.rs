//! Networking module
//!
//! Only the message exchange lives here; the transport that carries the bytes
//! between peers is provided by the embedding application.

pub mod protocol;

pub use protocol::{decode, encode, GameMessage};
