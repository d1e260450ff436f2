//! Loading `.ged` files into the record tables.

pub mod splitter;
pub mod walker;
pub mod db_writer;

pub use splitter::{RawRecord, split_records};
pub use walker::discover_gedcom_files;
pub use db_writer::{ImportStats, import_records};

use std::path::Path;

use crate::db::Db;
use crate::error::{GedviewError, Result};

/// Split one GEDCOM file and upsert its individuals and families.
pub async fn import_file(db: &Db, path: &Path) -> Result<ImportStats> {
    let text = std::fs::read_to_string(path).map_err(GedviewError::Io)?;
    let records = split_records(&text)
        .map_err(|e| GedviewError::Parse(format!("{}: {}", path.display(), e)))?;

    log::info!("{}: {} storable records", path.display(), records.len());

    import_records(db, records).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::RecordKind;
    use crate::store::{RecordStore, SqliteStore};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_import_file_then_fetch() {
        let temp_dir = TempDir::new().unwrap();
        let db = Db::new(temp_dir.path().join("tree.db"));
        db.migrate(Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations"))
            .await
            .unwrap();

        let ged = temp_dir.path().join("tree.ged");
        std::fs::write(
            &ged,
            "0 HEAD\n1 CHAR UTF-8\n0 @I1@ INDI\n1 NAME Ada /Byron/\n1 FAMC @F1@\n0 @F1@ FAM\n1 CHIL @I1@\n0 TRLR\n",
        )
        .unwrap();

        let stats = import_file(&db, &ged).await.unwrap();
        assert_eq!(stats, ImportStats { individuals: 1, families: 1 });

        let store = SqliteStore::new(db);
        let fam = store.fetch(RecordKind::Family, "F1").await.unwrap().unwrap();
        assert_eq!(fam, "0 @F1@ FAM\n1 CHIL @I1@\n");
    }

    #[tokio::test]
    async fn test_import_file_reports_path_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let db = Db::new(temp_dir.path().join("tree.db"));
        let ged = temp_dir.path().join("broken.ged");
        std::fs::write(&ged, "0 @I1@ INDI\nnonsense\n").unwrap();

        let err = import_file(&db, &ged).await.unwrap_err();
        assert!(err.to_string().contains("broken.ged"));
    }
}
