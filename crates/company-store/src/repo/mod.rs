//! Repository layer mapping models to SQLite rows
//!
//! Each public repository operation is a logging boundary: it emits a
//! start event, then either an end event or an end_error event carrying the
//! error code. Row-level details go to `tracing::debug!`.

pub mod department_repo;
pub mod employee_repo;
pub mod record;

pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
pub use record::Record;

use crate::errors::Result;
use company_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Run one repository operation inside its logging boundary
///
/// Errors leaving the boundary are stamped with the operation name unless a
/// lower layer already set one.
pub(crate) fn run_op<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op);
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            Ok(value)
        }
        Err(err) => {
            let err = if err.op().is_none() {
                err.with_op(op)
            } else {
                err
            };
            log_op_error!(
                op,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}
