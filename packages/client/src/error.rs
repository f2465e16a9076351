//! Top-level error type for the client.

use thiserror::Error;

use crate::{domain::ValueObjectError, usecase::SessionError};

/// Errors that make the client exit with a failure status
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValueObjectError),

    #[error("session failed: {0}")]
    Session(#[from] SessionError),
}
