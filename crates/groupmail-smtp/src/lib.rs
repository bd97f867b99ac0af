//! # groupmail-smtp
//!
//! A minimal plain-text SMTP submission client.
//!
//! The client drives a single blocking-style session against one relay:
//! greeting, `EHLO`, then one `MAIL FROM` / `RCPT TO` / `DATA` exchange per
//! outbound message, and `QUIT` at the end. Every server reply is validated
//! against the exact code the protocol step expects; anything else surfaces
//! as an [`Error`] the caller can match on.
//!
//! No TLS, no authentication, no pipelining: one command in flight at a
//! time over a single TCP connection.
//!
//! ## Quick Start
//!
//! ```ignore
//! use groupmail_smtp::{Address, Session};
//!
//! #[tokio::main]
//! async fn main() -> groupmail_smtp::Result<()> {
//!     let mut session = Session::connect("localhost", 1025, "groupmail").await?;
//!
//!     let from = Address::new("sender@example.com")?;
//!     let to = vec![Address::new("recipient@example.com")?];
//!
//!     let payload = b"Subject: Test\n\nHello, World!\n";
//!     session.send(&from, &to, payload).await?;
//!
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`command`]: SMTP command builders
//! - [`connection`]: Connection management and session driver
//! - [`parser`]: Reply line validation
//! - [`types`]: Core SMTP types (addresses, reply codes)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod command;
pub mod connection;
mod error;
pub mod parser;
pub mod types;

pub use connection::{Session, SmtpStream, connect};
pub use error::{Error, Result};
pub use types::{Address, ReplyCode};
