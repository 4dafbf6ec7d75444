//! Database connection management
//!
//! Opens and configures the SQLite connections the repositories run on.

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database file used when no path is configured
pub const DEFAULT_DB_PATH: &str = "company.db";

/// Where the store lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub path: PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the configured database, creating its parent directory if needed
    pub fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
        }
        open(&self.path)
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path.as_ref()).map_err(from_rusqlite)?;
    configure(&conn)?;

    // journal_mode answers with a row, so it cannot go through execute()
    let mode: String = conn
        .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(path = %path.as_ref().display(), journal_mode = %mode, "opened database");

    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Apply connection settings shared by every handle
///
/// Foreign keys stay unenforced: deleting a department must leave the
/// employees that reference it untouched.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = OFF;")
        .map_err(from_rusqlite)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        assert_eq!(DbConfig::default().path, PathBuf::from("company.db"));
    }

    #[test]
    fn test_open_in_memory_disables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 0);
    }

    #[test]
    fn test_config_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("company.db");
        let conn = DbConfig::new(&path).open().unwrap();
        drop(conn);
        assert!(path.exists());
    }
}
