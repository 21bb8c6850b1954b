//! Table definition for persisted data entries.
//!
//! There is exactly one table. Statements use `IF NOT EXISTS`, so applying
//! the schema to an already bootstrapped database changes nothing.

use crate::db::DbResult;
use rusqlite::Connection;

/// Name of the single table backing `DataEntry`.
pub const ENTRIES_TABLE: &str = "data_entries";

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `data_entries` table when missing.
pub fn apply_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Returns whether the entries table is present on this connection.
pub fn entries_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [ENTRIES_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
