//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use url::Url;

use super::error::ValueObjectError;

/// Server endpoint value object.
///
/// A WebSocket URL with scheme `ws` or `wss` and a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new ServerUrl.
    ///
    /// # Arguments
    ///
    /// * `url` - The endpoint string, e.g. `ws://localhost:8080/ws`
    ///
    /// # Returns
    ///
    /// A Result containing the ServerUrl or an error if validation fails
    pub fn new(url: String) -> Result<Self, ValueObjectError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::ServerUrlEmpty);
        }
        let parsed = Url::parse(trimmed)
            .map_err(|_| ValueObjectError::ServerUrlInvalidFormat(url.clone()))?;
        match parsed.scheme() {
            "ws" | "wss" => {}
            other => {
                return Err(ValueObjectError::ServerUrlUnsupportedScheme(
                    other.to_string(),
                ));
            }
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ValueObjectError::ServerUrlMissingHost(url));
        }
        Ok(Self(parsed))
    }

    /// Get the URL as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for ServerUrl {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Close frame contents.
///
/// Status code and reason sent by the peer (or by us) when the
/// connection is closed with a close frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseInfo {
    code: u16,
    reason: String,
}

impl CloseInfo {
    /// Create a new CloseInfo.
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    /// Close status code (e.g. 1000 for a normal closure).
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Close reason, possibly empty.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for CloseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.code, self.reason)
    }
}
