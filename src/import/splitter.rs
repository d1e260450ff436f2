use crate::error::{GedviewError, Result};
use crate::gedcom::{self, RecordKind, Tag};

/// Verbatim text of one level-0 record that belongs in a record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub kind: RecordKind,
    pub id: String,
    pub text: String,
}

fn starts_record(line: &str) -> bool {
    let line = line.trim_start_matches('\u{feff}').trim_start();
    line == "0" || line.starts_with("0 ")
}

/// Split GEDCOM text at level-0 lines.
///
/// Each chunk is parsed on its own, so a malformed record fails the split.
/// Only INDI and FAM records with an xref are returned; HEAD, TRLR, notes
/// and sources are dropped.
pub fn split_records(text: &str) -> Result<Vec<RawRecord>> {
    let mut chunks: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if starts_record(line) || chunks.is_empty() {
            chunks.push(String::new());
        }
        if let Some(chunk) = chunks.last_mut() {
            chunk.push_str(line.trim_start_matches('\u{feff}'));
            chunk.push('\n');
        }
    }

    let mut records = Vec::new();
    for chunk in chunks {
        let parsed = gedcom::parse(&chunk)?;
        let Some(record) = parsed.first() else {
            continue;
        };

        let kind = match record.tag() {
            Tag::Indi => RecordKind::Individual,
            Tag::Fam => RecordKind::Family,
            _ => continue,
        };

        let id = record.id().ok_or_else(|| {
            GedviewError::Parse(format!("{} record without xref: {}", kind.tag(), chunk.lines().next().unwrap_or("")))
        })?;

        records.push(RawRecord {
            kind,
            id: id.to_string(),
            text: chunk.clone(),
        });
    }

    Ok(records)
}
