use super::naming_errors::*;
use super::types::ErrorCode;

/// Central registry of all naming error codes
pub const ERROR_CODES: &[ErrorCode] = &[
    // Character rules (N001-N099)
    EMPTY_NAME,
    INVALID_FIRST_CHARACTER,
    INVALID_CHARACTER,
    // Schema node fields (N100-N199)
    MISSING_NAME_KEY,
    NAME_NOT_STRING,
    NAMESPACE_NOT_STRING,
    // Name registry (N200-N299)
    DUPLICATE_NAME,
    UNKNOWN_NAME,
];

/// Look up error code by code string (e.g., "N001", "N200")
pub fn lookup_error_code(code: &str) -> Option<&'static ErrorCode> {
    ERROR_CODES.iter().find(|item| item.code == code)
}
