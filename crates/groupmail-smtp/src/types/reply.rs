//! SMTP reply codes.

/// Three-digit SMTP reply code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReplyCode(u16);

impl ReplyCode {
    /// Creates a new reply code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true if this is a success code (2xx).
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl std::fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Codes the session driver expects at each step.
impl ReplyCode {
    /// 220 Service ready (connection greeting).
    pub const SERVICE_READY: Self = Self(220);
    /// 221 Service closing transmission channel (QUIT).
    pub const CLOSING: Self = Self(221);
    /// 250 Requested mail action okay, completed.
    pub const OK: Self = Self(250);
    /// 354 Start mail input (DATA).
    pub const START_DATA: Self = Self(354);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_codes() {
        assert!(ReplyCode::OK.is_success());
        assert!(ReplyCode::SERVICE_READY.is_success());
        assert!(ReplyCode::CLOSING.is_success());
        assert!(!ReplyCode::START_DATA.is_success());
    }

    #[test]
    fn as_u16() {
        assert_eq!(ReplyCode::OK.as_u16(), 250);
        assert_eq!(ReplyCode::START_DATA.as_u16(), 354);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", ReplyCode::OK), "250");
        assert_eq!(format!("{}", ReplyCode::new(550)), "550");
    }
}
