//! Table lifecycle command
//!
//! Usage: company db <init|reset|drop>

use super::CommandResult;
use clap::{Args, Subcommand};
use company_store::db::DbConfig;
use company_store::schema;

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the departments and employees tables
    Init,
    /// Drop both tables and create them again, empty
    Reset,
    /// Drop both tables
    Drop,
}

/// Execute db command
pub fn execute(args: DbArgs, config: &DbConfig) -> CommandResult {
    let conn = config.open()?;

    match args.command {
        DbCommand::Init => {
            schema::create_all(&conn)?;
            println!("✓ Tables ready in {}", config.path.display());
        }
        DbCommand::Reset => {
            schema::drop_all(&conn)?;
            schema::create_all(&conn)?;
            println!("✓ Tables reset in {}", config.path.display());
        }
        DbCommand::Drop => {
            schema::drop_all(&conn)?;
            println!("✓ Tables dropped from {}", config.path.display());
        }
    }

    Ok(())
}
