//! Company Store - SQLite persistence for departments and employees
//!
//! Provides:
//! - Connection management (`db`)
//! - Table lifecycle for both tables (`schema`)
//! - Repositories mapping rows to the `company-core` models (`repo`)
//!
//! Every operation takes the connection explicitly and runs as a single
//! auto-committed statement.

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::{DepartmentRepo, EmployeeRepo, Record};
