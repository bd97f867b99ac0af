//! MIME encoding and decoding utilities.
//!
//! Base64 for body content and RFC 2047 encoded-words for header text.
//! Decoders are provided so the round-trip can be checked: decoding what
//! the encoders produced must reproduce the original text exactly.

use crate::error::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Maximum length of an encoded body line.
const MAX_LINE_LENGTH: usize = 76;

/// Encodes data as Base64.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Encodes data as Base64, folded into lines of at most 76 characters.
#[must_use]
pub fn encode_base64_folded(data: &[u8]) -> String {
    let encoded = encode_base64(data);
    let mut folded = String::with_capacity(encoded.len() + encoded.len() / MAX_LINE_LENGTH);
    for (i, ch) in encoded.chars().enumerate() {
        if i > 0 && i % MAX_LINE_LENGTH == 0 {
            folded.push('\n');
        }
        folded.push(ch);
    }
    folded
}

/// Decodes Base64 data, ignoring embedded line folds.
///
/// # Errors
///
/// Returns an error if the input is not valid Base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact).map_err(Into::into)
}

/// Encodes header text as an RFC 2047 encoded-word.
///
/// Format: `=?charset?B?base64-text?=`. Unlike plain base64 content this is
/// unconditional; the caller decides whether the header needs encoding at
/// all.
#[must_use]
pub fn encode_encoded_word(text: &str, charset: &str) -> String {
    let encoded = encode_base64(text.as_bytes());
    format!("=?{charset}?B?{encoded}?=")
}

/// Decodes an RFC 2047 encoded-word; non-encoded input passes through.
///
/// # Errors
///
/// Returns an error for a malformed encoded-word or an unknown
/// transfer-encoding tag.
pub fn decode_encoded_word(text: &str) -> Result<String> {
    if !text.starts_with("=?") || !text.ends_with("?=") {
        return Ok(text.to_string());
    }

    let inner = &text[2..text.len() - 2];
    let parts: Vec<&str> = inner.split('?').collect();
    if parts.len() != 3 {
        return Err(Error::InvalidEncoding(
            "Invalid encoded-word format".to_string(),
        ));
    }

    match parts[1].to_uppercase().as_str() {
        "B" => {
            let decoded = decode_base64(parts[2])?;
            String::from_utf8(decoded).map_err(Into::into)
        }
        other => Err(Error::InvalidEncoding(format!(
            "Unknown encoded-word encoding: {other}"
        ))),
    }
}
