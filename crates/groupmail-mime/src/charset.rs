//! Character set handling.

use crate::error::{Error, Result};

/// Character sets the codec knows how to declare and encode.
///
/// Message text is held as Rust strings, so only ASCII-compatible charsets
/// whose bytes we can actually produce are supported: pure ASCII, which is
/// transmitted identity-encoded, and UTF-8, which goes out base64-encoded
/// with encoded-word subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Plain 7-bit ASCII.
    UsAscii,
    /// UTF-8.
    Utf8,
}

impl Charset {
    /// Parses a charset from its configured name.
    ///
    /// Matching is case-insensitive and accepts the common aliases
    /// (`ascii`, `us-ascii`, `utf8`, `utf-8`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCharset`] for anything else.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "us-ascii" | "ascii" => Ok(Self::UsAscii),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            _ => Err(Error::UnknownCharset(name.to_string())),
        }
    }

    /// Canonical MIME name, as written into `Content-Type`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UsAscii => "us-ascii",
            Self::Utf8 => "utf-8",
        }
    }

    /// True when text in this charset needs no transfer encoding.
    #[must_use]
    pub const fn is_ascii(self) -> bool {
        matches!(self, Self::UsAscii)
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
