//! Message template.

/// A message template: subject plus body.
///
/// Immutable once constructed; the body is stored with trailing whitespace
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    subject: String,
    body: String,
}

impl Message {
    /// Creates a new message.
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            subject: subject.into(),
            body: body.trim_end().to_string(),
        }
    }

    /// Returns the subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
