//! Test fixtures: a scripted WebSocket server and a recording reporter.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use futures_util::{SinkExt, StreamExt};
use room_probe_client::usecase::{ClientEvent, EventReporter};
use tokio::{io::AsyncWriteExt, net::TcpListener, task::JoinHandle};
use tokio_tungstenite::{
    accept_async,
    tungstenite::{
        Message, Utf8Bytes,
        protocol::{CloseFrame, frame::coding::CloseCode},
    },
};

/// One frame the server sends after the client's first frame.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Binary(Vec<u8>),
    /// Bytes written straight to the TCP stream, bypassing framing
    Raw(Vec<u8>),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// How the server ends the connection after its replies.
#[derive(Debug, Clone, Default)]
pub enum Ending {
    /// Send a close frame with this code and reason
    Close(u16, &'static str),
    /// Keep reading until the client closes
    #[default]
    WaitForClient,
    /// Drop the TCP stream without a close frame
    DropConnection,
    /// Stop reading and keep the TCP stream open
    Stall,
}

/// What the server does after the client's first frame arrives.
#[derive(Debug, Clone, Default)]
pub struct ServerScript {
    pub replies: Vec<Reply>,
    pub ending: Ending,
}

/// Single-connection WebSocket server on an ephemeral local port.
pub struct TestServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(script: ServerScript) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local address");
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.expect("Failed to accept");
            let mut ws = accept_async(stream).await.expect("Handshake failed");

            if let Some(Ok(Message::Text(text))) = ws.next().await {
                received_clone
                    .lock()
                    .unwrap()
                    .push(text.as_str().to_string());
            }

            for reply in script.replies {
                match reply {
                    Reply::Text(text) => ws.send(Message::Text(text.into())).await,
                    Reply::Binary(bytes) => ws.send(Message::Binary(bytes.into())).await,
                    Reply::Raw(bytes) => {
                        ws.get_mut()
                            .write_all(&bytes)
                            .await
                            .expect("Failed to write raw bytes");
                        Ok(())
                    }
                }
                .expect("Failed to send reply");
            }

            match script.ending {
                Ending::Close(code, reason) => {
                    let frame = CloseFrame {
                        code: CloseCode::from(code),
                        reason: Utf8Bytes::from_static(reason),
                    };
                    let _ = ws.close(Some(frame)).await;
                }
                Ending::WaitForClient => {}
                Ending::DropConnection => return,
                Ending::Stall => std::future::pending::<()>().await,
            }

            while let Some(Ok(msg)) = ws.next().await {
                if let Message::Text(text) = msg {
                    received_clone
                        .lock()
                        .unwrap()
                        .push(text.as_str().to_string());
                }
            }
        });

        Self {
            addr,
            received,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Text frames received so far.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Wait for the connection to finish and return every text frame received.
    pub async fn finish(self) -> Vec<String> {
        self.handle.await.expect("Test server panicked");
        self.received.lock().unwrap().clone()
    }
}

/// Reporter that keeps every event for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<ClientEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

impl EventReporter for RecordingReporter {
    fn report(&self, event: &ClientEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// A local address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    listener.local_addr().expect("Failed to read local address")
}
