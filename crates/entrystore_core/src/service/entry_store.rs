//! Entry store use-case service.
//!
//! # Responsibility
//! - Expose create/get/image-item entry points for core callers.
//! - Derive decoded views and image items from stored rows.
//! - Emit metadata-only diagnostic events for each operation.
//!
//! # Invariants
//! - `create_entry` returns the stored (still encoded) row.
//! - Missing ids are a normal outcome: `None` or an empty list.
//! - Backend errors propagate unchanged; nothing is retried.
//! - Logs never contain descriptions, queries, or links.

use crate::model::entry::{DataEntry, DecodedEntry, EntryId, ImageItem, NewDataEntry};
use crate::repo::entry_repo::{EntryRepository, RepoResult};
use log::{debug, error, info};
use std::time::Instant;

/// Façade over an entry repository implementation.
pub struct EntryStore<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new entry and returns it exactly as stored.
    ///
    /// Pairs are split into two parallel lists and each list is comma-joined
    /// into one column. No decoding is applied to the returned value.
    pub fn create_entry(&mut self, request: &NewDataEntry) -> RepoResult<DataEntry> {
        let started_at = Instant::now();
        match self.repo.create_entry(request) {
            Ok(entry) => {
                info!(
                    "event=entry_create module=store status=ok entry_id={} pairs={} duration_ms={}",
                    entry.id,
                    request.data.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(entry)
            }
            Err(err) => {
                error!(
                    "event=entry_create module=store status=error pairs={} duration_ms={} error={}",
                    request.data.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Gets one entry by id with `queries`/`img_links` decoded into lists.
    ///
    /// An empty stored field decodes to an empty list.
    pub fn get_entry(&self, id: EntryId) -> RepoResult<Option<DecodedEntry>> {
        let decoded = self.get_raw_entry(id)?.map(|entry| entry.decode());
        debug!(
            "event=entry_get module=store status=ok entry_id={} found={}",
            id,
            decoded.is_some()
        );
        Ok(decoded)
    }

    /// Returns the positional query/link pairs of one entry.
    ///
    /// Unknown ids yield an empty list. Stored fields are split raw, so an
    /// entry created without pairs yields a single item with empty fields.
    pub fn get_image_items(&self, id: EntryId) -> RepoResult<Vec<ImageItem>> {
        let items = self
            .get_raw_entry(id)?
            .map(|entry| entry.image_items())
            .unwrap_or_default();
        debug!(
            "event=image_items_get module=store status=ok entry_id={} items={}",
            id,
            items.len()
        );
        Ok(items)
    }

    /// Gets one entry by id in its stored, encoded shape.
    pub fn get_raw_entry(&self, id: EntryId) -> RepoResult<Option<DataEntry>> {
        match self.repo.get_entry(id) {
            Ok(entry) => Ok(entry),
            Err(err) => {
                error!(
                    "event=entry_lookup module=store status=error entry_id={} error={}",
                    id, err
                );
                Err(err)
            }
        }
    }
}
