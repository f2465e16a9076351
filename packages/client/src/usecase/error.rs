//! UseCase 層のエラー定義

use thiserror::Error;

use crate::{domain::ConnectionError, infrastructure::dto::EncodeError};

/// Errors raised by a [`FrameSink`](super::FrameSink) implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("failed to send frame: {0}")]
    Send(String),
}

/// Errors that end a room session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
