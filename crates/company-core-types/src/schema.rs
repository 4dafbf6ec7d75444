//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent across crates.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_DEPARTMENT_ID: &str = "department_id";
pub const FIELD_EMPLOYEE_ID: &str = "employee_id";
pub const FIELD_TABLE: &str = "table";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
