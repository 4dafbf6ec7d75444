//! Department commands
//!
//! Usage: company department <create|list|show|find|update|delete>

use super::{open_store, CommandResult, Output};
use clap::{Args, Subcommand};
use company_core::model::{Department, RecordId};
use company_core::CompanyError;
use company_store::db::DbConfig;
use company_store::repo::DepartmentRepo;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    #[command(subcommand)]
    pub command: DepartmentCommand,
}

#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    /// Store a new department
    Create {
        name: String,
        location: String,
    },
    /// List every department
    List,
    /// Show one department by id
    Show { id: RecordId },
    /// Show the first department with this name
    Find { name: String },
    /// Change a department's name or location
    Update {
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete a department; its employees keep their reference
    Delete { id: RecordId },
}

/// Execute department command
pub fn execute(args: DepartmentArgs, config: &DbConfig, output: Output) -> CommandResult {
    let conn = open_store(config)?;

    match args.command {
        DepartmentCommand::Create { name, location } => {
            let department = DepartmentRepo::create(&conn, name, location)?;
            output.record(&department)
        }
        DepartmentCommand::List => output.records(&DepartmentRepo::get_all(&conn)?),
        DepartmentCommand::Show { id } => output.record(&require(&conn, id)?),
        DepartmentCommand::Find { name } => match DepartmentRepo::find_by_name(&conn, &name)? {
            Some(department) => output.record(&department),
            None => Err(format!("No department named '{}'", name).into()),
        },
        DepartmentCommand::Update { id, name, location } => {
            let mut department = require(&conn, id)?;
            if let Some(name) = name {
                department.name = Some(name);
            }
            if let Some(location) = location {
                department.location = Some(location);
            }
            DepartmentRepo::update(&conn, &department)?;
            output.record(&department)
        }
        DepartmentCommand::Delete { id } => {
            let department = require(&conn, id)?;
            DepartmentRepo::delete(&conn, department)?;
            println!("✓ Deleted department {}", id);
            Ok(())
        }
    }
}

fn require(conn: &Connection, id: RecordId) -> Result<Department, Box<dyn std::error::Error>> {
    DepartmentRepo::find_by_id(conn, id)?
        .ok_or_else(|| CompanyError::DepartmentNotFound { department_id: id }.into())
}
