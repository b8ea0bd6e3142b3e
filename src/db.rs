// src/db.rs
//! SQLite schema for recipe collections
//!
//! The schema is declared at startup but nothing reads or writes it yet; the
//! live store stays in memory. Backing [`crate::store::CategoryStore`] with
//! these tables is tracked in DESIGN.md as an open question.

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Open the database and ensure the recipe tables exist.
pub fn init(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Declare the collection and recipe tables. Idempotent.
pub fn init_schema(conn: &Connection) -> Result<()> {
    debug!("Creating database tables");
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS rc_collections (
            collection_id INTEGER PRIMARY KEY,
            id            TEXT UNIQUE NOT NULL,
            name          TEXT NOT NULL
        ) STRICT;

        CREATE TABLE IF NOT EXISTS rc_recipes (
            id            INTEGER PRIMARY KEY,
            collection_id INTEGER NOT NULL
                          REFERENCES rc_collections(collection_id) ON DELETE NO ACTION,
            title         TEXT NOT NULL,
            ingredients   TEXT NOT NULL, -- JSON array as TEXT
            instructions  TEXT NOT NULL,
            cook_time_min INTEGER,
            servings      INTEGER
        ) STRICT;
        ",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn test_init_creates_tables() {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = init(temp_file.path()).unwrap();
        let tables = table_names(&conn);
        assert!(tables.contains(&"rc_collections".to_string()));
        assert!(tables.contains(&"rc_recipes".to_string()));
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = init(temp_file.path()).unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
    }
}
