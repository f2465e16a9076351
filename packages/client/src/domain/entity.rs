//! Entities for domain models.
//!
//! Entities have identity and lifecycle. The only one here is the
//! single WebSocket connection the client owns.

use super::{ServerUrl, error::ConnectionError};

/// Maximum number of outbound frames per connection.
pub const MAX_OUTBOUND_FRAMES: usize = 1;

/// Connection lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    NotConnected,
    Connected,
    Closed,
}

impl ConnectionStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::NotConnected => "not-connected",
            Self::Connected => "connected",
            Self::Closed => "closed",
        }
    }
}

/// Connection entity.
///
/// Tracks the lifecycle of the one WebSocket session and enforces that
/// at most [`MAX_OUTBOUND_FRAMES`] frames are sent, only while open and
/// only before any transport error.
#[derive(Debug, Clone)]
pub struct Connection {
    url: ServerUrl,
    status: ConnectionStatus,
    sent_frames: usize,
    errored: bool,
}

impl Connection {
    /// Create a new Connection in the `NotConnected` state.
    pub fn new(url: ServerUrl) -> Self {
        Self {
            url,
            status: ConnectionStatus::NotConnected,
            sent_frames: 0,
            errored: false,
        }
    }

    /// Target endpoint.
    pub fn url(&self) -> &ServerUrl {
        &self.url
    }

    /// Current lifecycle state.
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Number of outbound frames recorded so far.
    pub fn sent_frames(&self) -> usize {
        self.sent_frames
    }

    /// Whether a transport error has been observed.
    pub fn is_errored(&self) -> bool {
        self.errored
    }

    /// Transition `NotConnected` -> `Connected`.
    pub fn open(&mut self) -> Result<(), ConnectionError> {
        if self.errored {
            return Err(ConnectionError::Errored);
        }
        if self.status != ConnectionStatus::NotConnected {
            return Err(ConnectionError::InvalidOpen(self.status.as_str()));
        }
        self.status = ConnectionStatus::Connected;
        Ok(())
    }

    /// Check whether one more outbound frame is allowed.
    pub fn ensure_can_send(&self) -> Result<(), ConnectionError> {
        if self.status != ConnectionStatus::Connected {
            return Err(ConnectionError::NotOpen(self.status.as_str()));
        }
        if self.errored {
            return Err(ConnectionError::Errored);
        }
        if self.sent_frames >= MAX_OUTBOUND_FRAMES {
            return Err(ConnectionError::OutboundLimitReached {
                limit: MAX_OUTBOUND_FRAMES,
            });
        }
        Ok(())
    }

    /// Record an outbound frame that was handed to the transport.
    pub fn record_send(&mut self) -> Result<(), ConnectionError> {
        self.ensure_can_send()?;
        self.sent_frames += 1;
        Ok(())
    }

    /// Mark that the transport reported an error.
    ///
    /// The connection can no longer be opened or send frames.
    pub fn mark_errored(&mut self) {
        self.errored = true;
    }

    /// Transition to `Closed` from any other state.
    pub fn close(&mut self) -> Result<(), ConnectionError> {
        if self.status == ConnectionStatus::Closed {
            return Err(ConnectionError::AlreadyClosed);
        }
        self.status = ConnectionStatus::Closed;
        Ok(())
    }
}
