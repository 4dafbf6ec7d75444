//! Department persistence

use super::record::{fetch_all, fetch_one};
use super::run_op;
use crate::errors::{from_rusqlite, Result};
use crate::schema::{CREATE_DEPARTMENTS, DROP_DEPARTMENTS};
use company_core::model::{Department, NewDepartment, RecordId};
use rusqlite::{params, Connection, Row};

/// SQLite repository for departments
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Create the departments table if it is absent
    pub fn create_table(conn: &Connection) -> Result<()> {
        run_op("department_create_table", || {
            conn.execute(CREATE_DEPARTMENTS, []).map_err(from_rusqlite)?;
            Ok(())
        })
    }

    /// Drop the departments table if it is present
    pub fn drop_table(conn: &Connection) -> Result<()> {
        run_op("department_drop_table", || {
            conn.execute(DROP_DEPARTMENTS, []).map_err(from_rusqlite)?;
            Ok(())
        })
    }

    /// Insert a transient department and return it with its assigned id
    pub fn save(conn: &Connection, department: NewDepartment) -> Result<Department> {
        run_op("department_save", || {
            conn.execute(
                "INSERT INTO departments (name, location) VALUES (?1, ?2)",
                params![department.name, department.location],
            )
            .map_err(from_rusqlite)?;

            let id = conn.last_insert_rowid();
            tracing::debug!(department_id = id, "inserted department");
            Ok(department.into_persisted(id))
        })
    }

    /// Build and insert a department in one step
    pub fn create(
        conn: &Connection,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Department> {
        Self::save(conn, NewDepartment::new(name, location))
    }

    /// Overwrite the stored row with the department's current fields
    ///
    /// Updating a row that no longer exists is not an error; nothing changes.
    pub fn update(conn: &Connection, department: &Department) -> Result<()> {
        run_op("department_update", || {
            let changed = conn
                .execute(
                    "UPDATE departments SET name = ?1, location = ?2 WHERE id = ?3",
                    params![department.name, department.location, department.id()],
                )
                .map_err(from_rusqlite)?;

            tracing::debug!(department_id = department.id(), changed, "updated department");
            Ok(())
        })
    }

    /// Delete the stored row and hand the data back as a transient department
    ///
    /// Employees that reference the department keep their `department_id`.
    pub fn delete(conn: &Connection, department: Department) -> Result<NewDepartment> {
        run_op("department_delete", || {
            let changed = conn
                .execute("DELETE FROM departments WHERE id = ?1", [department.id()])
                .map_err(from_rusqlite)?;

            tracing::debug!(department_id = department.id(), changed, "deleted department");
            Ok(department.into_transient())
        })
    }

    /// Look up a department by id
    pub fn find_by_id(conn: &Connection, id: RecordId) -> Result<Option<Department>> {
        run_op("department_find_by_id", || fetch_one(conn, "id", [id]))
    }

    /// Look up the first department with this exact name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Department>> {
        run_op("department_find_by_name", || fetch_one(conn, "name", [name]))
    }

    /// All departments, ordered by id
    pub fn get_all(conn: &Connection) -> Result<Vec<Department>> {
        run_op("department_get_all", || fetch_all(conn))
    }

    /// Map a departments row to a model by column name
    pub fn instance_from_db(row: &Row<'_>) -> rusqlite::Result<Department> {
        <Department as super::Record>::instance_from_db(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup() -> Connection {
        let conn = db::open_in_memory().unwrap();
        DepartmentRepo::create_table(&conn).unwrap();
        conn
    }

    #[test]
    fn test_save_assigns_sequential_ids() {
        let conn = setup();
        let first = DepartmentRepo::create(&conn, "Engineering", "Nairobi").unwrap();
        let second = DepartmentRepo::create(&conn, "Finance", "Kisumu").unwrap();
        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
    }

    #[test]
    fn test_save_without_table_is_persistence_error() {
        let conn = db::open_in_memory().unwrap();
        let err = DepartmentRepo::create(&conn, "Engineering", "Nairobi").unwrap_err();
        assert_eq!(err.kind(), company_core::ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("department_save"));
        assert!(err.source_as::<rusqlite::Error>().is_some());
    }
}
