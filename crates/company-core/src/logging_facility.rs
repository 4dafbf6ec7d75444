//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use company_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use company_core_types::schema;
pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
