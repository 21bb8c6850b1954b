//! Domain model for persisted entries and their derived views.
//!
//! # Responsibility
//! - Define the stored shape (`DataEntry`) and the request shape used to
//!   create it (`NewDataEntry`).
//! - Define view-only shapes (`DecodedEntry`, `ImageItem`) that are never
//!   written back to storage.
//!
//! # Invariants
//! - The stored shape keeps encoded text; decoding always produces a new
//!   value instead of mutating the stored one.

pub mod entry;
