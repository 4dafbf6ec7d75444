//! Table definitions and whole-schema lifecycle
//!
//! Both tables are created with `IF NOT EXISTS` and dropped with
//! `IF EXISTS`, so every call here is safe to repeat.

use crate::errors::{from_rusqlite, Result};
use crate::repo::{DepartmentRepo, EmployeeRepo};
use rusqlite::Connection;

pub const DEPARTMENTS_TABLE: &str = "departments";
pub const EMPLOYEES_TABLE: &str = "employees";

pub(crate) const CREATE_DEPARTMENTS: &str = "CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY,
    name TEXT,
    location TEXT
)";

pub(crate) const DROP_DEPARTMENTS: &str = "DROP TABLE IF EXISTS departments";

pub(crate) const CREATE_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT,
    job_title TEXT,
    salary INTEGER,
    department_id INTEGER,
    FOREIGN KEY(department_id) REFERENCES departments(id)
)";

pub(crate) const DROP_EMPLOYEES: &str = "DROP TABLE IF EXISTS employees";

/// Create both tables
pub fn create_all(conn: &Connection) -> Result<()> {
    DepartmentRepo::create_table(conn)?;
    EmployeeRepo::create_table(conn)
}

/// Drop both tables, employees first
pub fn drop_all(conn: &Connection) -> Result<()> {
    EmployeeRepo::drop_table(conn)?;
    DepartmentRepo::drop_table(conn)
}

/// Check whether a table is present in the database
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)?;
    Ok(count > 0)
}
