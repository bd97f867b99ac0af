//! Input file loaders: address lists and message templates.

use crate::error::{Error, Result};
use crate::model::Message;
use groupmail_smtp::Address;
use std::fs;
use std::path::Path;

/// Loads the address list: one address per line, validated on the spot.
///
/// Blank lines are skipped; the first malformed address aborts the load.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or the address
/// validation error for a malformed line.
pub fn load_addresses(path: &Path) -> Result<Vec<Address>> {
    let text = fs::read_to_string(path)?;
    parse_addresses(&text)
}

/// Parses an address list from text.
///
/// # Errors
///
/// Returns the address validation error for a malformed line.
pub fn parse_addresses(text: &str) -> Result<Vec<Address>> {
    let mut addresses = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        addresses.push(Address::new(line)?);
    }
    Ok(addresses)
}

/// Loads message templates from a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a configuration
/// error if no templates are found.
pub fn load_messages(path: &Path, separator: &str) -> Result<Vec<Message>> {
    let text = fs::read_to_string(path)?;
    parse_messages(&text, separator)
}

/// Parses message templates from text.
///
/// Records are delimited by lines starting with `separator`. The first
/// line of a record is the subject, the remaining lines the body; trailing
/// whitespace on the body is stripped by [`Message::new`].
///
/// # Errors
///
/// Returns [`Error::Config`] if the text contains no templates.
pub fn parse_messages(text: &str, separator: &str) -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    let mut subject: Option<String> = None;
    let mut body = String::new();

    for line in text.lines() {
        let line = line.trim();

        if line.starts_with(separator) {
            if let Some(s) = subject.take() {
                messages.push(Message::new(s, &body));
            }
            body.clear();
            continue;
        }

        if subject.is_none() {
            subject = Some(line.to_string());
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }

    if let Some(s) = subject.take() {
        messages.push(Message::new(s, &body));
    }

    if messages.is_empty() {
        return Err(Error::Config("no message templates found".to_string()));
    }
    Ok(messages)
}
