//! WebSocket message DTOs for the room client.
//!
//! Outbound JSON is written with `": "` and `", "` separators so the text
//! on the wire is `{"action": "create"}`.

use std::{io, string::FromUtf8Error};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use thiserror::Error;

/// Errors raised while encoding an outbound message
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("serialized message is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Room action understood by the game server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomAction {
    Create,
}

/// Action request sent by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionMessage {
    pub action: RoomAction,
}

impl ActionMessage {
    /// The "create room" request.
    pub fn create() -> Self {
        Self {
            action: RoomAction::Create,
        }
    }

    /// Serialize to the text sent in a WebSocket text frame.
    pub fn to_wire_text(&self) -> Result<String, EncodeError> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Compact JSON with a space after every `:` and `,`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
