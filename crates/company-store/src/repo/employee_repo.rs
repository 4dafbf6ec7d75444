//! Employee persistence and the employee → department lookup

use super::record::{fetch_all, fetch_one};
use super::run_op;
use super::DepartmentRepo;
use crate::errors::{from_rusqlite, Result};
use crate::schema::{CREATE_EMPLOYEES, DROP_EMPLOYEES};
use company_core::model::{Department, Employee, NewEmployee, RecordId};
use rusqlite::{params, Connection, Row};

/// SQLite repository for employees
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Create the employees table if it is absent
    pub fn create_table(conn: &Connection) -> Result<()> {
        run_op("employee_create_table", || {
            conn.execute(CREATE_EMPLOYEES, []).map_err(from_rusqlite)?;
            Ok(())
        })
    }

    /// Drop the employees table if it is present
    pub fn drop_table(conn: &Connection) -> Result<()> {
        run_op("employee_drop_table", || {
            conn.execute(DROP_EMPLOYEES, []).map_err(from_rusqlite)?;
            Ok(())
        })
    }

    /// Insert a transient employee and return it with its assigned id
    pub fn save(conn: &Connection, employee: NewEmployee) -> Result<Employee> {
        run_op("employee_save", || {
            conn.execute(
                "INSERT INTO employees (name, job_title, salary, department_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    employee.name,
                    employee.job_title,
                    employee.salary,
                    employee.department_id,
                ],
            )
            .map_err(from_rusqlite)?;

            let id = conn.last_insert_rowid();
            tracing::debug!(employee_id = id, department_id = ?employee.department_id, "inserted employee");
            Ok(employee.into_persisted(id))
        })
    }

    /// Build and insert an employee in one step
    pub fn create(
        conn: &Connection,
        name: impl Into<String>,
        job_title: impl Into<String>,
        salary: i64,
        department_id: Option<RecordId>,
    ) -> Result<Employee> {
        let mut draft = NewEmployee::new(name, job_title, salary);
        draft.department_id = department_id;
        Self::save(conn, draft)
    }

    /// Overwrite the stored row with the employee's current fields
    pub fn update(conn: &Connection, employee: &Employee) -> Result<()> {
        run_op("employee_update", || {
            let changed = conn
                .execute(
                    "UPDATE employees
                     SET name = ?1, job_title = ?2, salary = ?3, department_id = ?4
                     WHERE id = ?5",
                    params![
                        employee.name,
                        employee.job_title,
                        employee.salary,
                        employee.department_id,
                        employee.id(),
                    ],
                )
                .map_err(from_rusqlite)?;

            tracing::debug!(employee_id = employee.id(), changed, "updated employee");
            Ok(())
        })
    }

    /// Delete the stored row and hand the data back as a transient employee
    pub fn delete(conn: &Connection, employee: Employee) -> Result<NewEmployee> {
        run_op("employee_delete", || {
            let changed = conn
                .execute("DELETE FROM employees WHERE id = ?1", [employee.id()])
                .map_err(from_rusqlite)?;

            tracing::debug!(employee_id = employee.id(), changed, "deleted employee");
            Ok(employee.into_transient())
        })
    }

    /// Look up an employee by id
    pub fn find_by_id(conn: &Connection, id: RecordId) -> Result<Option<Employee>> {
        run_op("employee_find_by_id", || fetch_one(conn, "id", [id]))
    }

    /// Look up the first employee with this exact name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Employee>> {
        run_op("employee_find_by_name", || fetch_one(conn, "name", [name]))
    }

    /// All employees, ordered by id
    pub fn get_all(conn: &Connection) -> Result<Vec<Employee>> {
        run_op("employee_get_all", || fetch_all(conn))
    }

    /// Map an employees row to a model by column name
    pub fn instance_from_db(row: &Row<'_>) -> rusqlite::Result<Employee> {
        <Employee as super::Record>::instance_from_db(row)
    }

    /// Resolve the department this employee points at
    ///
    /// Returns `None` when the employee has no department or the referenced
    /// row is gone.
    pub fn department(conn: &Connection, employee: &Employee) -> Result<Option<Department>> {
        run_op("employee_department", || match employee.department_id {
            Some(department_id) => DepartmentRepo::find_by_id(conn, department_id),
            None => Ok(None),
        })
    }
}
