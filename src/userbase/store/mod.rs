//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the record collection.
//! Storage is whole-collection: every operation loads everything, mutates in
//! memory and writes everything back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage as two mirrored JSON files
//!   - Every save writes the primary file and then the backup file
//!   - Loading reads the primary, falls back to the backup, then to empty
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert that nothing was written
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── active_database.json   # primary copy (JSON array of records)
//! ├── backup_database.json   # mirror, read only when the primary is unusable
//! ├── user_database_log.txt  # event log
//! └── config.json            # optional configuration
//! ```
//!
//! A missing or malformed store is not an error: it degrades to an empty
//! collection and the fallback is written to the event log.
//!
//! Nothing guards against two processes writing the same files at once.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for the record collection.
pub trait DataStore {
    /// Load the full collection, in insertion order. Never fails.
    fn load(&self) -> Vec<Record>;

    /// Replace the stored collection with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
