//! WebSocket room client library.
//!
//! Opens one connection to a game server, requests a new room and logs
//! every lifecycle event of the connection.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use client::run_client;
pub use infrastructure::run_session;
