//! Employee commands
//!
//! Usage: company employee <create|list|show|find|update|delete|department>

use super::{open_store, CommandResult, Output};
use clap::{Args, Subcommand};
use company_core::model::{Employee, RecordId};
use company_core::CompanyError;
use company_store::db::DbConfig;
use company_store::repo::EmployeeRepo;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Store a new employee
    Create {
        name: String,
        job_title: String,
        #[arg(allow_negative_numbers = true)]
        salary: i64,
        /// Department id; not checked against the departments table
        #[arg(long)]
        department: Option<RecordId>,
    },
    /// List every employee
    List,
    /// Show one employee by id
    Show { id: RecordId },
    /// Show the first employee with this name
    Find { name: String },
    /// Change an employee's fields
    Update {
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        job_title: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        salary: Option<i64>,
        #[arg(long, conflicts_with = "no_department")]
        department: Option<RecordId>,
        /// Clear the department reference
        #[arg(long)]
        no_department: bool,
    },
    /// Delete an employee
    Delete { id: RecordId },
    /// Show the department an employee belongs to
    Department { id: RecordId },
}

/// Execute employee command
pub fn execute(args: EmployeeArgs, config: &DbConfig, output: Output) -> CommandResult {
    let conn = open_store(config)?;

    match args.command {
        EmployeeCommand::Create {
            name,
            job_title,
            salary,
            department,
        } => {
            let employee = EmployeeRepo::create(&conn, name, job_title, salary, department)?;
            output.record(&employee)
        }
        EmployeeCommand::List => output.records(&EmployeeRepo::get_all(&conn)?),
        EmployeeCommand::Show { id } => output.record(&require(&conn, id)?),
        EmployeeCommand::Find { name } => match EmployeeRepo::find_by_name(&conn, &name)? {
            Some(employee) => output.record(&employee),
            None => Err(format!("No employee named '{}'", name).into()),
        },
        EmployeeCommand::Update {
            id,
            name,
            job_title,
            salary,
            department,
            no_department,
        } => {
            let mut employee = require(&conn, id)?;
            if let Some(name) = name {
                employee.name = Some(name);
            }
            if let Some(job_title) = job_title {
                employee.job_title = Some(job_title);
            }
            if let Some(salary) = salary {
                employee.salary = Some(salary);
            }
            if no_department {
                employee.department_id = None;
            } else if department.is_some() {
                employee.department_id = department;
            }
            EmployeeRepo::update(&conn, &employee)?;
            output.record(&employee)
        }
        EmployeeCommand::Delete { id } => {
            let employee = require(&conn, id)?;
            EmployeeRepo::delete(&conn, employee)?;
            println!("✓ Deleted employee {}", id);
            Ok(())
        }
        EmployeeCommand::Department { id } => {
            let employee = require(&conn, id)?;
            match EmployeeRepo::department(&conn, &employee)? {
                Some(department) => output.record(&department),
                None => {
                    println!("{} has no department", employee);
                    Ok(())
                }
            }
        }
    }
}

fn require(conn: &Connection, id: RecordId) -> Result<Employee, Box<dyn std::error::Error>> {
    EmployeeRepo::find_by_id(conn, id)?
        .ok_or_else(|| CompanyError::EmployeeNotFound { employee_id: id }.into())
}
