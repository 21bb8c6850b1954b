//! Data entry domain model.
//!
//! # Responsibility
//! - Define the record stored in `data_entries` and its creation request.
//! - Provide the decoded view and the transient query/image pair.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes afterwards.
//! - `queries` and `img_links` are parallel: element `i` of each forms one
//!   pair once decoded.
//! - Elements are comma-joined without escaping; an element that contains
//!   a comma splits into several elements when read back.

use crate::codec::{decode_list, split_pairs, split_raw};
use serde::{Deserialize, Serialize};

/// Storage-assigned row identifier (`data_entries.id`).
pub type EntryId = i64;

/// Persisted entry exactly as stored.
///
/// `queries` and `img_links` hold the comma-joined encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    pub id: EntryId,
    /// Free-text label.
    pub description: String,
    /// Comma-joined query strings.
    pub queries: String,
    /// Comma-joined image links, parallel to `queries`.
    pub img_links: String,
}

impl DataEntry {
    /// Returns the decoded view of this entry.
    ///
    /// An empty stored field decodes to an empty list, not `[""]`.
    pub fn decode(&self) -> DecodedEntry {
        DecodedEntry {
            id: self.id,
            description: self.description.clone(),
            queries: decode_list(&self.queries),
            img_links: decode_list(&self.img_links),
        }
    }

    /// Pairs the raw stored fields positionally into image items.
    ///
    /// Splits without the empty-field rule used by [`DataEntry::decode`],
    /// so an entry created with no pairs yields one empty item. Pairing
    /// stops at the shorter list.
    pub fn image_items(&self) -> Vec<ImageItem> {
        split_raw(&self.queries)
            .into_iter()
            .zip(split_raw(&self.img_links))
            .map(|(name, url)| ImageItem { name, url })
            .collect()
    }
}

/// Decoded view of a stored entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedEntry {
    pub id: EntryId,
    pub description: String,
    pub queries: Vec<String>,
    pub img_links: Vec<String>,
}

/// Creation request: a description plus ordered `(query, image_link)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDataEntry {
    pub description: String,
    pub data: Vec<(String, String)>,
}

impl NewDataEntry {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            data: Vec::new(),
        }
    }

    /// Appends one `(query, image_link)` pair.
    pub fn with_pair(mut self, query: impl Into<String>, img_link: impl Into<String>) -> Self {
        self.data.push((query.into(), img_link.into()));
        self
    }

    /// Splits the pairs into two parallel lists: queries and image links.
    pub fn columns(&self) -> (Vec<String>, Vec<String>) {
        split_pairs(&self.data)
    }
}

/// Transient query/image pair derived from a stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    /// Taken from one `queries` element.
    pub name: String,
    /// Taken from the paired `img_links` element.
    pub url: String,
}

impl ImageItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
