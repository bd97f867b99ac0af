//! High-level delivery services.

mod mail;

pub use mail::Mailer;
