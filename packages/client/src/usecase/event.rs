//! Lifecycle events reported by a session.

use std::fmt;

use crate::domain::CloseInfo;

/// One reportable lifecycle event.
///
/// `Display` renders the log line for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Opened,
    Sent(String),
    Received(String),
    Error(String),
    /// `None` when the connection ended without a close frame.
    Closed(Option<CloseInfo>),
}

impl fmt::Display for ClientEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened => write!(f, "opened"),
            Self::Sent(payload) => write!(f, "sent: {payload}"),
            Self::Received(payload) => write!(f, "received: {payload}"),
            Self::Error(err) => write!(f, "error: {err}"),
            Self::Closed(Some(info)) => write!(f, "closed: {info}"),
            Self::Closed(None) => write!(f, "closed: no status"),
        }
    }
}

/// Output port for lifecycle events.
#[cfg_attr(test, mockall::automock)]
pub trait EventReporter: Send {
    fn report(&self, event: &ClientEvent);
}
