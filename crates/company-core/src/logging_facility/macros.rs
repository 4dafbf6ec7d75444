//! Canonical logging macros
//!
//! Public repository operations own their start/end boundary; internals log
//! with plain `tracing::debug!`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use company_core::log_op_start;
/// log_op_start!("department_save");
/// log_op_start!("department_find_by_id", department_id = 4);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use company_core::log_op_end;
/// log_op_end!("department_save", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`.
///
/// # Example
///
/// ```
/// # use company_core::{log_op_error, CompanyError};
/// let err = CompanyError::DepartmentNotFound { department_id: 9 };
/// log_op_error!("department_show", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
