//! UseCase: ルーム作成セッション
//!
//! 接続が open になった直後に `{"action": "create"}` を 1 度だけ送信し、
//! 以降のイベント（受信・エラー・クローズ）を EventReporter に渡します。
//!
//! ### どのような状況を想定しているか
//! - 正常系：open → 送信 → 受信 → サーバーからの close
//! - 異常系：送信失敗、接続エラー
//! - エッジケース：close 通知の重複、エラー後の open

use async_trait::async_trait;

use crate::{
    domain::{CloseInfo, Connection, ServerUrl},
    infrastructure::dto::ActionMessage,
};

use super::{
    error::{SessionError, TransportError},
    event::{ClientEvent, EventReporter},
};

/// Outbound side of a connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FrameSink: Send {
    /// Transmit one text frame.
    async fn send_text(&mut self, text: String) -> Result<(), TransportError>;
}

/// ルーム作成セッション
///
/// Callbacks for one connection. Holds the [`Connection`] entity and the
/// reporter that receives every lifecycle event.
pub struct CreateRoomSession<R> {
    connection: Connection,
    reporter: R,
}

impl<R: EventReporter> CreateRoomSession<R> {
    /// 新しい CreateRoomSession を作成
    pub fn new(url: ServerUrl, reporter: R) -> Self {
        Self {
            connection: Connection::new(url),
            reporter,
        }
    }

    /// Connection state, for inspection by callers and tests.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Handshake completed: report, then send the create request once.
    ///
    /// # Errors
    ///
    /// Fails when the lifecycle forbids sending, or when encoding or
    /// transmitting the request fails. Transmit failures are fatal to the
    /// caller; nothing is retried.
    pub async fn on_open<S>(&mut self, sink: &mut S) -> Result<(), SessionError>
    where
        S: FrameSink + ?Sized,
    {
        self.connection.open()?;
        self.reporter.report(&ClientEvent::Opened);

        self.connection.ensure_can_send()?;
        let payload = ActionMessage::create().to_wire_text()?;
        sink.send_text(payload.clone()).await?;
        self.connection.record_send()?;

        self.reporter.report(&ClientEvent::Sent(payload));
        Ok(())
    }

    /// Inbound frame, logged verbatim.
    pub fn on_message(&mut self, payload: &str) {
        self.reporter
            .report(&ClientEvent::Received(payload.to_string()));
    }

    /// Transport error. Logged only; no recovery.
    pub fn on_error(&mut self, err: &str) {
        self.connection.mark_errored();
        self.reporter.report(&ClientEvent::Error(err.to_string()));
    }

    /// Connection terminated. Reported once; later calls are ignored.
    pub fn on_close(&mut self, info: Option<CloseInfo>) {
        if self.connection.close().is_err() {
            tracing::debug!("Ignoring duplicate close notification");
            return;
        }
        self.reporter.report(&ClientEvent::Closed(info));
    }
}
