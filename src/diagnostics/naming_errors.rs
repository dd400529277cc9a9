use super::types::{ErrorCode, ErrorType};

// Character rules (N001-N099)

pub const EMPTY_NAME: ErrorCode = ErrorCode {
    code: "N001",
    title: "EMPTY NAME",
    error_type: ErrorType::InvalidName,
    message: "not be empty",
    hint: None,
};

pub const INVALID_FIRST_CHARACTER: ErrorCode = ErrorCode {
    code: "N002",
    title: "INVALID FIRST CHARACTER",
    error_type: ErrorType::InvalidName,
    message: "start with [A-Za-z_]",
    hint: Some("`{}` begins with `{}`."),
};

pub const INVALID_CHARACTER: ErrorCode = ErrorCode {
    code: "N003",
    title: "INVALID CHARACTER",
    error_type: ErrorType::InvalidName,
    message: "have second and remaining characters contain only [A-Za-z0-9_]",
    hint: Some("`{}` contains `{}`."),
};

// Schema node fields (N100-N199)

pub const MISSING_NAME_KEY: ErrorCode = ErrorCode {
    code: "N100",
    title: "MISSING NAME KEY",
    error_type: ErrorType::Schema,
    message: "ought to have name key",
    hint: None,
};

pub const NAME_NOT_STRING: ErrorCode = ErrorCode {
    code: "N101",
    title: "NAME NOT STRING",
    error_type: ErrorType::Schema,
    message: "name ought to be non-empty string",
    hint: Some("Found {}."),
};

pub const NAMESPACE_NOT_STRING: ErrorCode = ErrorCode {
    code: "N102",
    title: "NAMESPACE NOT STRING",
    error_type: ErrorType::Schema,
    message: "namespace ought to be a string",
    hint: Some("Found {}."),
};

// Name registry (N200-N299)

pub const DUPLICATE_NAME: ErrorCode = ErrorCode {
    code: "N200",
    title: "DUPLICATE NAME",
    error_type: ErrorType::Registry,
    message: "type name already exists: {}",
    hint: Some("Each named type must have a unique fullname."),
};

pub const UNKNOWN_NAME: ErrorCode = ErrorCode {
    code: "N201",
    title: "UNKNOWN NAME",
    error_type: ErrorType::Registry,
    message: "unknown type name: {}",
    hint: Some("Named types must be defined before they are referenced."),
};
