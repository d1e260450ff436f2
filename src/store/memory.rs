use async_trait::async_trait;
use std::collections::HashMap;

use super::RecordStore;
use crate::error::Result;
use crate::gedcom::RecordKind;

/// In-memory record store, keyed like the SQLite tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<(RecordKind, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: RecordKind, id: impl Into<String>, text: impl Into<String>) {
        self.records.insert((kind, id.into()), text.into());
    }

    /// Builder-style `insert`
    pub fn with(mut self, kind: RecordKind, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(kind, id, text);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch(&self, kind: RecordKind, id: &str) -> Result<Option<String>> {
        Ok(self.records.get(&(kind, id.to_string())).cloned())
    }
}
