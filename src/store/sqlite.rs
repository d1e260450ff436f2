use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use super::RecordStore;
use crate::db::Db;
use crate::error::Result;
use crate::gedcom::RecordKind;

/// Record store over the `wt_individuals` / `wt_families` tables.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Db,
}

impl SqliteStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

fn select_for(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Individual => "SELECT i_gedcom FROM wt_individuals WHERE i_id = ?1",
        RecordKind::Family => "SELECT f_gedcom FROM wt_families WHERE f_id = ?1",
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn fetch(&self, kind: RecordKind, id: &str) -> Result<Option<String>> {
        let id = id.to_string();
        let sql = select_for(kind);
        self.db
            .with_connection(move |conn| {
                let gedcom = conn
                    .query_row(sql, params![id], |row| row.get::<_, String>(0))
                    .optional()?;
                Ok(gedcom)
            })
            .await
    }
}
