//! SMTP reply line validation.
//!
//! The session driver only ever needs two judgements about a server line:
//! whether it starts with the reply code the current step expects, and
//! whether it terminates a multi-line reply. Both look at fixed byte
//! positions, per the textual SMTP convention.

use crate::error::{Error, Result};
use crate::types::ReplyCode;

/// Validates that a server line carries the expected reply code.
///
/// A line is acceptable iff its first three characters equal the expected
/// numeric code. Everything else, including lines shorter than three
/// characters, is a protocol failure carrying the raw line.
///
/// # Errors
///
/// Returns [`Error::UnexpectedReply`] when the prefix does not match.
pub fn expect_code(line: &str, expected: ReplyCode) -> Result<()> {
    let code = expected.to_string();
    if line.as_bytes().get(..3) == Some(code.as_bytes()) {
        return Ok(());
    }
    Err(Error::UnexpectedReply {
        expected,
        line: line.to_string(),
    })
}

/// Checks if a line is the last line of a multi-line reply.
///
/// Multi-line replies use `-` after the code for continuation and a space
/// for the final line (`250-...` vs `250 ...`). Inspecting the fourth byte
/// is an intentional simplification of the RFC 5321 rule: continuation
/// lines are only delimited here, never code-checked.
#[must_use]
pub fn is_last_reply_line(line: &str) -> bool {
    line.len() >= 4 && line.as_bytes()[3] == b' '
}
