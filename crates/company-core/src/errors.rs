use crate::model::RecordId;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Underlying error kept intact behind an `ExError`
pub type SourceError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Canonical structured error type
///
/// Carries a classification kind, the operation that failed, and the
/// original lower-level error (for example a `rusqlite::Error`) untouched
/// so callers can still inspect it through `source()` or `source_as()`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<SourceError>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the underlying error
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Downcast the underlying error to a concrete type
    pub fn source_as<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        self.source.as_deref().and_then(|e| e.downcast_ref::<T>())
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain-level failures raised above the storage layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompanyError {
    /// No department row carries this id
    #[error("Department not found: {department_id}")]
    DepartmentNotFound { department_id: RecordId },

    /// No employee row carries this id
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: RecordId },

    /// Rendering a record as JSON failed
    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl From<CompanyError> for ExError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::DepartmentNotFound { department_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(department_id)
                    .with_message("Department not found")
            }
            CompanyError::EmployeeNotFound { employee_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(employee_id)
                .with_message("Employee not found"),
            CompanyError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CompanyError {
    fn from(err: serde_json::Error) -> Self {
        CompanyError::Serialization {
            message: err.to_string(),
        }
    }
}
