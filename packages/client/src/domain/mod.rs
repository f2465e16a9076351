//! Domain layer for the room client.
//!
//! This module contains the connection lifecycle rules, independent of
//! the WebSocket library and of how events are reported.

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::{Connection, ConnectionStatus};
pub use error::{ConnectionError, ValueObjectError};
pub use value_object::{CloseInfo, ServerUrl};
