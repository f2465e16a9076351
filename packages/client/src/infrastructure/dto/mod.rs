//! Data transfer objects exchanged with the game server.

pub mod websocket;

pub use websocket::{ActionMessage, EncodeError, RoomAction};
