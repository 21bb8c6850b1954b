//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for stored entries.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories return the stored shape; they never decode columns.
//! - DB transport errors are wrapped, never swallowed or retried.

pub mod entry_repo;
