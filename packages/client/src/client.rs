//! Client entry point.

use crate::{
    config::ClientConfig,
    error::ClientError,
    infrastructure::run_session,
    ui::TracingReporter,
    usecase::CreateRoomSession,
};

/// Connect, create a room and log events until the connection closes.
///
/// The first Ctrl+C starts a graceful close; a second one stops at once.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let mut session = CreateRoomSession::new(config.url, TracingReporter);

    tokio::select! {
        result = run_session(&mut session, ctrl_c()) => result?,
        () = ctrl_c_twice() => {
            tracing::warn!("Interrupted again, stopping without waiting for the peer");
            session.on_close(None);
        }
    }
    Ok(())
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn ctrl_c_twice() {
    ctrl_c().await;
    ctrl_c().await;
}
