//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or inconsistent configuration, detected before any network
    /// activity.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// SMTP operation failed; the kind (protocol vs transport) is carried
    /// by the inner error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] groupmail_smtp::Error),

    /// MIME rendering or charset error.
    #[error("MIME error: {0}")]
    Mime(#[from] groupmail_mime::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
