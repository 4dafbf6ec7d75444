use serde::{Deserialize, Serialize};
use std::fmt;

use super::{RecordId, Shown};

/// A department that has not been stored yet
///
/// Columns are nullable in the table, so every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl NewDepartment {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            location: Some(location.into()),
        }
    }

    /// Attach the id the store assigned on insert
    pub fn into_persisted(self, id: RecordId) -> Department {
        Department {
            id,
            name: self.name,
            location: self.location,
        }
    }
}

/// A department row that exists in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    id: RecordId,
    pub name: Option<String>,
    pub location: Option<String>,
}

impl Department {
    /// Surrogate key; stable for the lifetime of the row
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Drop the id, returning the same data in the transient state
    pub fn into_transient(self) -> NewDepartment {
        NewDepartment {
            name: self.name,
            location: self.location,
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Department {}: {}, {}>",
            self.id,
            Shown(&self.name),
            Shown(&self.location)
        )
    }
}
