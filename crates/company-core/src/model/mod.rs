//! Domain models
//!
//! Each entity exists in two states. The `New*` types are transient: they
//! have never been stored and carry no id. `Department` and `Employee` are
//! persisted: they always carry the surrogate id the store assigned, and
//! that id cannot be changed once set.

pub mod department;
pub mod employee;

pub use department::{Department, NewDepartment};
pub use employee::{Employee, NewEmployee};

/// Surrogate primary key assigned by the store (SQLite rowid)
pub type RecordId = i64;

/// Renders a nullable column the way the table shows it: `None` when absent
pub(crate) struct Shown<'a, T>(pub(crate) &'a Option<T>);

impl<T: std::fmt::Display> std::fmt::Display for Shown<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => std::fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}
