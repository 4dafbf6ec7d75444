//! Subcommand handlers

pub mod db;
pub mod department;
pub mod employee;

use company_core::CompanyError;
use company_store::db::DbConfig;
use company_store::schema;
use rusqlite::Connection;
use serde::Serialize;
use std::fmt::Display;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// How records are printed
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print a single record
    pub fn record<T: Serialize + Display>(&self, record: &T) -> CommandResult {
        if self.json {
            println!("{}", serde_json::to_string(record).map_err(CompanyError::from)?);
        } else {
            println!("{}", record);
        }
        Ok(())
    }

    /// Print a list of records, one per line (or one JSON array)
    pub fn records<T: Serialize + Display>(&self, records: &[T]) -> CommandResult {
        if self.json {
            println!("{}", serde_json::to_string(records).map_err(CompanyError::from)?);
        } else {
            for record in records {
                println!("{}", record);
            }
        }
        Ok(())
    }
}

/// Open the configured database with both tables in place
pub fn open_store(config: &DbConfig) -> Result<Connection, Box<dyn std::error::Error>> {
    let conn = config.open()?;
    schema::create_all(&conn)?;
    Ok(conn)
}
