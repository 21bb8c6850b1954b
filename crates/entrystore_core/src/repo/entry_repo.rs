//! Entry repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/lookup APIs over the `data_entries` table.
//! - Keep SQL and column encoding inside the persistence boundary.
//!
//! # Invariants
//! - Inserts run inside one immediate transaction and are committed before
//!   the row is re-read.
//! - Reads return the stored (encoded) shape; decoding happens in callers.
//! - Lookups by unknown id return `None`, never an error.

use crate::codec::encode_list;
use crate::db::DbError;
use crate::model::entry::{DataEntry, EntryId, NewDataEntry};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    description,
    queries,
    img_links
FROM data_entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A freshly committed row could not be read back.
    NotFound(EntryId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "data entry not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for data entry persistence.
pub trait EntryRepository {
    /// Inserts one entry, commits, and returns the stored row.
    fn create_entry(&mut self, request: &NewDataEntry) -> RepoResult<DataEntry>;
    /// Loads one stored row by primary key.
    fn get_entry(&self, id: EntryId) -> RepoResult<Option<DataEntry>>;
}

/// SQLite-backed entry repository borrowing a caller-owned connection.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn create_entry(&mut self, request: &NewDataEntry) -> RepoResult<DataEntry> {
        let (queries, img_links) = request.columns();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO data_entries (
                description,
                queries,
                img_links
            ) VALUES (?1, ?2, ?3);",
            params![
                request.description.as_str(),
                encode_list(&queries),
                encode_list(&img_links),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        // Refresh from storage so callers see exactly what was persisted.
        self.get_entry(id)?.ok_or(RepoError::NotFound(id))
    }

    fn get_entry(&self, id: EntryId) -> RepoResult<Option<DataEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!("{ENTRY_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_entry_row,
            )
            .optional()?;
        Ok(entry)
    }
}

fn parse_entry_row(row: &Row<'_>) -> rusqlite::Result<DataEntry> {
    Ok(DataEntry {
        id: row.get("id")?,
        description: row.get("description")?,
        queries: row.get("queries")?,
        img_links: row.get("img_links")?,
    })
}
