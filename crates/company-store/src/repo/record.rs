//! Column-name row mapping shared by both repositories

use crate::errors::{from_rusqlite, Result};
use company_core::model::{Department, Employee, NewDepartment, NewEmployee};
use rusqlite::{Connection, OptionalExtension, Params, Row};

/// A model that maps onto one table
pub trait Record: Sized {
    /// Table the records live in
    const TABLE: &'static str;

    /// Columns selected for every read, primary key first
    const COLUMNS: &'static [&'static str];

    /// Build a persisted model from a row, reading columns by name
    fn instance_from_db(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl Record for Department {
    const TABLE: &'static str = crate::schema::DEPARTMENTS_TABLE;
    const COLUMNS: &'static [&'static str] = &["id", "name", "location"];

    fn instance_from_db(row: &Row<'_>) -> rusqlite::Result<Self> {
        let draft = NewDepartment {
            name: row.get("name")?,
            location: row.get("location")?,
        };
        Ok(draft.into_persisted(row.get("id")?))
    }
}

impl Record for Employee {
    const TABLE: &'static str = crate::schema::EMPLOYEES_TABLE;
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "job_title", "salary", "department_id"];

    fn instance_from_db(row: &Row<'_>) -> rusqlite::Result<Self> {
        let draft = NewEmployee {
            name: row.get("name")?,
            job_title: row.get("job_title")?,
            salary: row.get("salary")?,
            department_id: row.get("department_id")?,
        };
        Ok(draft.into_persisted(row.get("id")?))
    }
}

/// SELECT over a record's columns, optionally filtered on one column
pub(crate) fn select_sql<T: Record>(filter_column: Option<&str>) -> String {
    let columns = T::COLUMNS.join(", ");
    match filter_column {
        Some(column) => format!(
            "SELECT {} FROM {} WHERE {} = ?1 ORDER BY id LIMIT 1",
            columns,
            T::TABLE,
            column
        ),
        None => format!("SELECT {} FROM {} ORDER BY id", columns, T::TABLE),
    }
}

/// Fetch the first record whose `column` matches, or None
pub(crate) fn fetch_one<T: Record, P: Params>(
    conn: &Connection,
    column: &str,
    params: P,
) -> Result<Option<T>> {
    let mut stmt = conn
        .prepare(&select_sql::<T>(Some(column)))
        .map_err(from_rusqlite)?;

    stmt.query_row(params, T::instance_from_db)
        .optional()
        .map_err(from_rusqlite)
}

/// Fetch every record in the table
pub(crate) fn fetch_all<T: Record>(conn: &Connection) -> Result<Vec<T>> {
    let mut stmt = conn
        .prepare(&select_sql::<T>(None))
        .map_err(from_rusqlite)?;

    let records = stmt
        .query_map([], T::instance_from_db)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql_by_column() {
        assert_eq!(
            select_sql::<Department>(Some("name")),
            "SELECT id, name, location FROM departments WHERE name = ?1 ORDER BY id LIMIT 1"
        );
    }

    #[test]
    fn test_select_sql_all() {
        assert_eq!(
            select_sql::<Employee>(None),
            "SELECT id, name, job_title, salary, department_id FROM employees ORDER BY id"
        );
    }
}
