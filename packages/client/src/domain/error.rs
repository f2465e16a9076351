//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ServerUrl validation error
    #[error("ServerUrl cannot be empty")]
    ServerUrlEmpty,

    /// ServerUrl could not be parsed
    #[error("ServerUrl is not a valid URL (got: {0})")]
    ServerUrlInvalidFormat(String),

    /// ServerUrl scheme is neither ws nor wss
    #[error("ServerUrl scheme must be ws or wss (got: {0})")]
    ServerUrlUnsupportedScheme(String),

    /// ServerUrl without a host
    #[error("ServerUrl must contain a host (got: {0})")]
    ServerUrlMissingHost(String),
}

/// Errors related to the connection lifecycle
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// Open reported on a connection that is already open or closed
    #[error("Connection cannot be opened from state '{0}'")]
    InvalidOpen(&'static str),

    /// Outbound frame attempted while the connection is not open
    #[error("Cannot send on a connection in state '{0}'")]
    NotOpen(&'static str),

    /// Outbound frame attempted after a transport error
    #[error("Cannot send after a transport error")]
    Errored,

    /// Outbound frame limit reached
    #[error("Outbound frame limit reached: maximum {limit} frames allowed")]
    OutboundLimitReached { limit: usize },

    /// Close reported twice
    #[error("Connection is already closed")]
    AlreadyClosed,
}
