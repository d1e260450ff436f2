use rusqlite::params;
use crate::db::Db;
use crate::error::Result;
use crate::gedcom::RecordKind;
use super::RawRecord;

/// Counts of rows written by one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub individuals: usize,
    pub families: usize,
}

impl ImportStats {
    pub fn total(&self) -> usize {
        self.individuals + self.families
    }
}

impl std::ops::AddAssign for ImportStats {
    fn add_assign(&mut self, other: Self) {
        self.individuals += other.individuals;
        self.families += other.families;
    }
}

/// Insert or replace records in a single transaction.
///
/// Existing rows with the same id are overwritten, so re-importing an
/// updated export is safe.
pub async fn import_records(db: &Db, records: Vec<RawRecord>) -> Result<ImportStats> {
    db.with_connection(move |conn| {
        let tx = conn.transaction()?;
        let mut stats = ImportStats::default();
        {
            let mut insert_individual = tx.prepare(
                r#"
                INSERT INTO wt_individuals (i_id, i_gedcom) VALUES (?1, ?2)
                ON CONFLICT(i_id) DO UPDATE SET
                    i_gedcom = excluded.i_gedcom,
                    imported_at = CURRENT_TIMESTAMP
                "#,
            )?;
            let mut insert_family = tx.prepare(
                r#"
                INSERT INTO wt_families (f_id, f_gedcom) VALUES (?1, ?2)
                ON CONFLICT(f_id) DO UPDATE SET
                    f_gedcom = excluded.f_gedcom,
                    imported_at = CURRENT_TIMESTAMP
                "#,
            )?;

            for record in &records {
                match record.kind {
                    RecordKind::Individual => {
                        insert_individual.execute(params![record.id, record.text])?;
                        stats.individuals += 1;
                    }
                    RecordKind::Family => {
                        insert_family.execute(params![record.id, record.text])?;
                        stats.families += 1;
                    }
                }
            }
        }
        tx.commit()?;

        log::debug!("Upserted {} individuals and {} families", stats.individuals, stats.families);
        Ok(stats)
    })
    .await
}
