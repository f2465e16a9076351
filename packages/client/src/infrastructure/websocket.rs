//! WebSocket transport.
//!
//! Connects with `tokio-tungstenite` and drives a [`CreateRoomSession`]
//! from the connection's events until the connection ends.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use tokio::{
    net::TcpStream,
    time::{Instant, sleep, timeout},
};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{
        Error as WsError, Message, Utf8Bytes,
        protocol::{CloseFrame, frame::coding::CloseCode},
    },
};

use crate::{
    domain::CloseInfo,
    usecase::{CreateRoomSession, EventReporter, FrameSink, SessionError, TransportError},
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Reason sent with the close frame on a local shutdown.
const SHUTDOWN_REASON: &str = "client shutdown";

/// How long to wait for the peer's close reply after a local shutdown.
pub const CLOSE_REPLY_TIMEOUT: Duration = Duration::from_secs(3);

/// Write half of the connection.
pub(crate) struct WebSocketWriter {
    inner: SplitSink<WsStream, Message>,
}

impl WebSocketWriter {
    fn new(inner: SplitSink<WsStream, Message>) -> Self {
        Self { inner }
    }

    /// Start the closing handshake with a normal-closure frame.
    async fn send_close(&mut self) -> Result<(), WsError> {
        let frame = CloseFrame {
            code: CloseCode::Normal,
            reason: Utf8Bytes::from_static(SHUTDOWN_REASON),
        };
        self.inner.send(Message::Close(Some(frame))).await
    }

    /// Flush and release the write half.
    async fn finish(&mut self) {
        match self.inner.close().await {
            Ok(()) | Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => {}
            Err(e) => tracing::debug!("Error while closing write half: {}", e),
        }
    }
}

#[async_trait]
impl FrameSink for WebSocketWriter {
    async fn send_text(&mut self, text: String) -> Result<(), TransportError> {
        self.inner
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| TransportError::Send(e.to_string()))
    }
}

/// Run one session until the connection ends.
///
/// A failed connect is reported through the session's error and close
/// callbacks and is not an `Err`. When `shutdown` completes the client
/// starts the closing handshake and waits up to [`CLOSE_REPLY_TIMEOUT`]
/// for the peer to answer.
///
/// # Errors
///
/// Returns the session's error when the open callback fails.
pub async fn run_session<R, F>(
    session: &mut CreateRoomSession<R>,
    shutdown: F,
) -> Result<(), SessionError>
where
    R: EventReporter,
    F: Future<Output = ()>,
{
    let url = session.connection().url().clone();
    tracing::debug!("Connecting to {}", url);
    let (ws_stream, response) = match connect_async(url.as_str()).await {
        Ok(pair) => pair,
        Err(e) => {
            session.on_error(&e.to_string());
            session.on_close(None);
            return Ok(());
        }
    };
    tracing::debug!("Handshake completed with status {}", response.status());

    let (write, mut read) = ws_stream.split();
    let mut writer = WebSocketWriter::new(write);

    session.on_open(&mut writer).await?;

    read_until_closed(session, &mut writer, &mut read, shutdown).await;
    if timeout(CLOSE_REPLY_TIMEOUT, writer.finish()).await.is_err() {
        tracing::debug!("Timed out flushing the write half");
    }
    Ok(())
}

async fn read_until_closed<R, F>(
    session: &mut CreateRoomSession<R>,
    writer: &mut WebSocketWriter,
    read: &mut SplitStream<WsStream>,
    shutdown: F,
) where
    R: EventReporter,
    F: Future<Output = ()>,
{
    let mut shutdown = std::pin::pin!(shutdown);
    let mut close_deadline = std::pin::pin!(sleep(CLOSE_REPLY_TIMEOUT));
    let mut closing = false;

    loop {
        tokio::select! {
            frame = read.next() => match frame {
                Some(Ok(Message::Text(text))) => session.on_message(text.as_str()),
                Some(Ok(Message::Binary(bytes))) => {
                    session.on_message(&String::from_utf8_lossy(&bytes));
                }
                Some(Ok(Message::Close(frame))) => {
                    let info = frame.map(|f| CloseInfo::new(u16::from(f.code), f.reason.as_str()));
                    session.on_close(info);
                    break;
                }
                Some(Ok(_)) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Some(Err(e)) => {
                    session.on_error(&e.to_string());
                    session.on_close(None);
                    break;
                }
                None => {
                    session.on_close(None);
                    break;
                }
            },
            () = &mut shutdown, if !closing => {
                tracing::info!("Shutdown requested, closing connection");
                closing = true;
                close_deadline.as_mut().reset(Instant::now() + CLOSE_REPLY_TIMEOUT);
                if let Err(e) = writer.send_close().await {
                    session.on_error(&e.to_string());
                    session.on_close(None);
                    break;
                }
            }
            () = &mut close_deadline, if closing => {
                tracing::warn!("Peer did not answer the close frame, dropping connection");
                session.on_close(None);
                break;
            }
        }
    }
}
