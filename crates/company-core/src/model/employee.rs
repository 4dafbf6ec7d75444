use serde::{Deserialize, Serialize};
use std::fmt;

use super::{RecordId, Shown};

/// An employee that has not been stored yet
///
/// Columns are nullable in the table, so every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub salary: Option<i64>,
    pub department_id: Option<RecordId>,
}

impl NewEmployee {
    /// Create an employee with no department
    pub fn new(name: impl Into<String>, job_title: impl Into<String>, salary: i64) -> Self {
        Self {
            name: Some(name.into()),
            job_title: Some(job_title.into()),
            salary: Some(salary),
            department_id: None,
        }
    }

    /// Point the employee at a department id
    ///
    /// The id is not checked against the departments table.
    pub fn with_department(mut self, department_id: RecordId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Attach the id the store assigned on insert
    pub fn into_persisted(self, id: RecordId) -> Employee {
        Employee {
            id,
            name: self.name,
            job_title: self.job_title,
            salary: self.salary,
            department_id: self.department_id,
        }
    }
}

/// An employee row that exists in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: RecordId,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub salary: Option<i64>,
    pub department_id: Option<RecordId>,
}

impl Employee {
    /// Surrogate key; stable for the lifetime of the row
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Drop the id, returning the same data in the transient state
    pub fn into_transient(self) -> NewEmployee {
        NewEmployee {
            name: self.name,
            job_title: self.job_title,
            salary: self.salary,
            department_id: self.department_id,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Employee {}: {}, {}, Ksh {}>",
            self.id,
            Shown(&self.name),
            Shown(&self.job_title),
            Shown(&self.salary)
        )
    }
}
