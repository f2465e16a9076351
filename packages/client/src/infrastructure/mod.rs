//! Infrastructure layer: wire format and WebSocket transport.

pub mod dto;
pub mod websocket;

pub use websocket::{CLOSE_REPLY_TIMEOUT, run_session};
