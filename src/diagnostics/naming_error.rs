use std::fmt;

use super::format::format_message;
use super::types::{ErrorCode, ErrorType};

/// The single error type raised while building, validating, or registering names.
///
/// Every failure carries a static [`ErrorCode`] and the reason text formatted from its
/// template. Failures are terminal for the builder call that produced them; callers
/// decide whether the surrounding schema parse can continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingError {
    code: &'static ErrorCode,
    reason: String,
    hint: Option<String>,
}

impl NamingError {
    /// Create an error from a code, filling the message and hint templates with `values`.
    pub fn make(code: &'static ErrorCode, values: &[&str]) -> Self {
        Self {
            code,
            reason: format_message(code.message, values),
            hint: code.hint.map(|hint| format_message(hint, values)),
        }
    }

    pub fn error_code(&self) -> &'static ErrorCode {
        self.code
    }

    /// The code string, e.g. `"N002"`.
    pub fn code(&self) -> &'static str {
        self.code.code
    }

    pub fn title(&self) -> &'static str {
        self.code.title
    }

    pub fn error_type(&self) -> ErrorType {
        self.code.error_type
    }

    /// The human-readable reason without the category prefix.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// True when this error was raised from `code`.
    pub fn is(&self, code: &ErrorCode) -> bool {
        self.code.code == code.code
    }
}

impl fmt::Display for NamingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.code.error_type.prefix(), self.reason)
    }
}

impl std::error::Error for NamingError {}
