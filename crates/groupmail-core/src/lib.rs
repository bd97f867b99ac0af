//! # groupmail-core
//!
//! The domain layer of groupmail: partitions a flat address list into
//! bounded-size groups with a rotating sender, loads the configuration and
//! input files, and drives one SMTP submission per group through
//! [`service::Mailer`].
//!
//! ## Modules
//!
//! - [`config`]: `key=value` configuration file
//! - [`loader`]: address list and message template files
//! - [`model`]: immutable value objects ([`Message`](model::Message),
//!   [`Group`](model::Group), [`Email`](model::Email))
//! - [`partition`]: the group partitioning algorithm
//! - [`service`]: codec + session composition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod loader;
pub mod model;
pub mod partition;
pub mod service;

pub use error::{Error, Result};

// Re-exported so callers build envelopes without naming the wire crate.
pub use groupmail_smtp::Address;
