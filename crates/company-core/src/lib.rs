//! Company Core - domain model and shared facilities
//!
//! This crate provides:
//! - Department and Employee models in their transient and persisted states
//! - The structured error facility (`ExError`, `ExErrorKind`, `CompanyError`)
//! - The structured logging facility and its boundary macros
//!
//! Persistence lives in `company-store`; nothing here touches SQLite.

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{CompanyError, ExError, ExErrorKind, Result};
pub use model::{Department, Employee, NewDepartment, NewEmployee, RecordId};
