//! Error code types for naming errors

/// Groups naming error codes by where they are raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A candidate identifier breaks the character rules
    InvalidName,
    /// A schema node is missing a key or holds the wrong JSON type
    Schema,
    /// A name clashes with, or is missing from, a name registry
    Registry,
}

impl ErrorType {
    /// Returns the text placed in front of the formatted message when displayed
    pub fn prefix(&self) -> &'static str {
        match self {
            ErrorType::InvalidName => {
                "The name portion of a fullname, record field names, and enum symbols must "
            }
            ErrorType::Schema | ErrorType::Registry => "",
        }
    }
}

/// Static error code with message template and optional hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    pub code: &'static str,
    pub title: &'static str,
    pub error_type: ErrorType,
    pub message: &'static str,
    pub hint: Option<&'static str>,
}
