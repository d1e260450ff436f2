//! Random-access lookup of raw GEDCOM text by record kind and id.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use crate::error::Result;
use crate::gedcom::RecordKind;

/// Source of raw record text.
///
/// `Ok(None)` means the id has no backing record. Any failure to reach the
/// backing storage is an `Err` and aborts the caller's resolution.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch(&self, kind: RecordKind, id: &str) -> Result<Option<String>>;
}
