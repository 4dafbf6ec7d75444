//! Error handling for company-store
//!
//! Wraps company-core ExError with store-specific helpers. The original
//! driver error is always kept as the `source()`.

use company_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_message(err.to_string())
        .with_source(err)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
        .with_source(err)
}
