//! Room client: opens a WebSocket connection, creates a room and logs
//! everything the server sends back.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin room-probe -- --url ws://localhost:8080/ws
//! ```

use clap::Parser;
use room_probe_client::{
    config::{Args, ClientConfig},
    error::ClientError,
};
use room_probe_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the client
    if let Err(e) = run(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let config = ClientConfig::try_from(args)?;
    room_probe_client::run_client(config).await
}
