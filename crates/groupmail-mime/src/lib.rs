//! # groupmail-mime
//!
//! Renders outbound email into SMTP `DATA` payload bytes: a header block
//! and a body, separated by one blank line. The caller appends the
//! protocol terminator.
//!
//! The one hard guarantee this crate makes is header/body agreement: when
//! the configured [`Charset`] is not plain ASCII the body is base64-encoded,
//! `Content-Transfer-Encoding: base64` is declared, and the subject uses
//! the matching RFC 2047 encoded-word form; otherwise everything stays
//! identity-encoded and the headers say so. The codec never declares an
//! encoding that does not match the bytes it produced.
//!
//! ## Quick Start
//!
//! ```ignore
//! use groupmail_mime::{Charset, render};
//! use chrono::Utc;
//!
//! let payload = render(
//!     "alice@example.com",
//!     &["bob@example.com"],
//!     "Lunch?",
//!     "Meet at noon.",
//!     Charset::Utf8,
//!     Utc::now(),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod charset;
mod error;
mod render;

pub mod encoding;

pub use charset::Charset;
pub use error::{Error, Result};
pub use render::{TransferEncoding, render};
