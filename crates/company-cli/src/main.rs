//! Company CLI
//!
//! Command-line interface over the departments and employees store

use clap::{Parser, Subcommand};
use company_core::logging_facility::{self, Profile};
use company_store::db::{DbConfig, DEFAULT_DB_PATH};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "company")]
#[command(about = "Company - departments and employees in SQLite", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "COMPANY_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Human-readable operation logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON operation logs on stderr
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Table lifecycle operations
    Db(commands::db::DbArgs),
    /// Department records
    Department(commands::department::DepartmentArgs),
    /// Employee records
    Employee(commands::employee::EmployeeArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logging_facility::init(Profile::Production);
    } else if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let config = DbConfig::new(cli.db);
    let output = commands::Output { json: cli.json };

    let result = match cli.command {
        Commands::Db(args) => commands::db::execute(args, &config),
        Commands::Department(args) => commands::department::execute(args, &config, output),
        Commands::Employee(args) => commands::employee::execute(args, &config, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
