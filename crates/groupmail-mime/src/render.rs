//! SMTP `DATA` payload rendering.

use crate::charset::Charset;
use crate::encoding::{encode_base64_folded, encode_encoded_word};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Transfer encoding declared in the rendered headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEncoding {
    /// 7-bit ASCII, transmitted as-is.
    SevenBit,
    /// Base64 encoding.
    Base64,
}

impl TransferEncoding {
    /// The encoding a charset's content goes out with.
    #[must_use]
    pub const fn for_charset(charset: Charset) -> Self {
        if charset.is_ascii() {
            Self::SevenBit
        } else {
            Self::Base64
        }
    }
}

impl std::fmt::Display for TransferEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SevenBit => write!(f, "7bit"),
            Self::Base64 => write!(f, "base64"),
        }
    }
}

/// Renders an outbound message into `DATA` payload bytes.
///
/// Produces the header block (`From`, `To`, `Subject`, `Date`,
/// `MIME-Version`, `Content-Type`, `Content-Transfer-Encoding`), one blank
/// line, then the body. Lines end in `\n`; the protocol terminator is the
/// session driver's job.
///
/// The declared transfer encoding always matches the bytes: for an ASCII
/// charset the subject and body pass through untouched under `7bit`; for
/// anything else the subject becomes an RFC 2047 encoded-word and the body
/// is base64, folded at 76 columns, under `base64`.
///
/// Rendering is deterministic: the timestamp for the `Date` header is an
/// explicit input, and identical inputs yield byte-identical payloads.
#[must_use]
pub fn render(
    from: &str,
    to: &[&str],
    subject: &str,
    body: &str,
    charset: Charset,
    date: DateTime<Utc>,
) -> Vec<u8> {
    let encoding = TransferEncoding::for_charset(charset);

    let (subject_line, body_block) = match encoding {
        TransferEncoding::SevenBit => (subject.to_string(), body.to_string()),
        TransferEncoding::Base64 => (
            encode_encoded_word(subject, charset.name()),
            encode_base64_folded(body.as_bytes()),
        ),
    };

    let mut out = String::new();
    let _ = writeln!(out, "From: {from}");
    let _ = writeln!(out, "To: {}", to.join(", "));
    let _ = writeln!(out, "Subject: {subject_line}");
    let _ = writeln!(out, "Date: {}", date.to_rfc2822());
    out.push_str("MIME-Version: 1.0\n");
    let _ = writeln!(out, "Content-Type: text/plain; charset=\"{charset}\"");
    let _ = writeln!(out, "Content-Transfer-Encoding: {encoding}");
    out.push('\n');
    out.push_str(&body_block);
    if !body_block.ends_with('\n') {
        out.push('\n');
    }

    out.into_bytes()
}
