//! Command-line configuration.

use clap::Parser;

use crate::domain::{ServerUrl, ValueObjectError};

/// Endpoint used when `--url` is not given.
pub const DEFAULT_SERVER_URL: &str = "ws://206.189.40.120:8080/ws";

/// Open a game room over WebSocket and log everything the server sends back.
#[derive(Debug, Parser)]
#[command(name = "room-probe", version, about)]
pub struct Args {
    /// WebSocket endpoint of the game server
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub url: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: ServerUrl,
}

impl TryFrom<Args> for ClientConfig {
    type Error = ValueObjectError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(Self {
            url: ServerUrl::new(args.url)?,
        })
    }
}
