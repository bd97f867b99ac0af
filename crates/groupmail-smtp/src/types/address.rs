//! Email address type.

use crate::error::{Error, Result};

/// Validated email address for SMTP envelopes and message headers.
///
/// Validation is deliberately simple: a local part, exactly one `@`, and a
/// dotted domain ending in an alphabetic suffix of at least two characters.
/// Full RFC 5321 address syntax is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Creates a new address from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the address is malformed.
    pub fn new(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        Self::validate(&addr)?;
        Ok(Self(addr))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(addr: &str) -> Result<()> {
        let invalid = || Error::InvalidAddress(addr.to_string());

        let (local, domain) = addr.split_once('@').ok_or_else(invalid)?;

        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        if !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
        {
            return Err(invalid());
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        {
            return Err(invalid());
        }

        // Domain must be dotted, with a TLD-like alphabetic suffix.
        let (name, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
        if name.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        Ok(())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
