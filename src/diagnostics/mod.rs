//! Error codes and the error type shared by every naming operation.

mod format;
mod naming_error;
mod naming_errors;
mod registry;
pub mod types;

pub use format::format_message;
pub use naming_error::NamingError;
pub use naming_errors::*;
pub use registry::{ERROR_CODES, lookup_error_code};
pub use types::{ErrorCode, ErrorType};
