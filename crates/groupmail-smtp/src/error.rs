//! Error types for SMTP operations.

use std::io;

/// Result type alias for SMTP operations.
pub type Result<T> = std::result::Result<T, Error>;

/// SMTP error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Socket-level failure during connect, read, or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Server reply did not start with the code the current step expects.
    ///
    /// Carries the raw line so callers can log exactly what the relay said.
    #[error("expected reply {expected}, server said: {line}")]
    UnexpectedReply {
        /// Reply code the protocol step required.
        expected: crate::types::ReplyCode,
        /// Raw line read from the server.
        line: String,
    },

    /// Server closed the stream while a reply was expected.
    #[error("connection closed by server")]
    ConnectionClosed,

    /// Invalid email address.
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Returns true for protocol failures (bad reply code, early EOF).
    #[must_use]
    pub const fn is_protocol(&self) -> bool {
        matches!(self, Self::UnexpectedReply { .. } | Self::ConnectionClosed)
    }

    /// Returns true for transport failures (socket-level I/O).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
