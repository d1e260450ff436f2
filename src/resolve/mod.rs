//! Pointer dereferencing over a record store.
//!
//! Every hop is a store round trip followed by a parse; nothing is cached
//! between calls and nothing is fetched concurrently, so results always
//! follow document order.

mod individual;

use crate::error::{GedviewError, Result};
use crate::gedcom::{self, first_of_kind, strip_pointer, Record, RecordKind, Tag};
use crate::store::RecordStore;

/// Pointer-valued sub-record tags the resolver follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Family the individual is a child in
    Famc,
    /// Family the individual is a spouse in
    Fams,
    Wife,
    Husb,
    Chil,
}

impl Link {
    pub fn tag(self) -> Tag {
        match self {
            Link::Famc => Tag::Famc,
            Link::Fams => Tag::Fams,
            Link::Wife => Tag::Wife,
            Link::Husb => Tag::Husb,
            Link::Chil => Tag::Chil,
        }
    }

    /// Kind of record the pointer names
    pub fn target(self) -> RecordKind {
        match self {
            Link::Famc | Link::Fams => RecordKind::Family,
            Link::Wife | Link::Husb | Link::Chil => RecordKind::Individual,
        }
    }
}

/// Resolves individuals and their immediate relations from a record store.
pub struct Resolver<S> {
    store: S,
}

impl<S: RecordStore> Resolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Dereference every immediate `link` sub-record of `source`.
    ///
    /// Pointers without a backing record are skipped. Store and parse
    /// failures are returned as errors.
    pub async fn resolve_references(&self, source: &Record, link: Link) -> Result<Vec<Record>> {
        let tag = link.tag();
        let kind = link.target();
        let mut resolved = Vec::new();

        for sub in source.children_with(&tag) {
            let id = strip_pointer(sub.value());
            if id.is_empty() {
                log::debug!("Skipping empty {} pointer under {}", tag, source.tag());
                continue;
            }

            let Some(text) = self.store.fetch(kind, id).await? else {
                log::debug!("{} {} referenced by {} not found", kind, id, tag);
                continue;
            };

            let mut record = first_of_kind(parse_fetched(kind, id, &text)?, kind).ok_or_else(|| {
                GedviewError::Parse(format!("{} {} has no level-0 {} record", kind, id, kind.tag()))
            })?;
            record.ensure_xref(id);
            resolved.push(record);
        }

        Ok(resolved)
    }
}

/// Parse fetched text, naming the record in any error.
fn parse_fetched(kind: RecordKind, id: &str, text: &str) -> Result<Vec<Record>> {
    gedcom::parse(text).map_err(|e| match e {
        GedviewError::Parse(msg) => GedviewError::Parse(format!("{} {}: {}", kind, id, msg)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::parse;
    use crate::store::MemoryStore;

    fn source(text: &str) -> Record {
        parse(text).unwrap().remove(0)
    }

    #[test]
    fn test_link_targets() {
        assert_eq!(Link::Famc.target(), RecordKind::Family);
        assert_eq!(Link::Fams.target(), RecordKind::Family);
        assert_eq!(Link::Chil.target(), RecordKind::Individual);
        assert_eq!(Link::Husb.tag(), Tag::Husb);
    }

    #[tokio::test]
    async fn test_resolve_references_in_document_order() {
        let store = MemoryStore::new()
            .with(RecordKind::Individual, "I6", "0 @I6@ INDI\n1 NAME Six\n")
            .with(RecordKind::Individual, "I5", "0 @I5@ INDI\n1 NAME Five\n");
        let resolver = Resolver::new(store);
        let fam = source("0 @F1@ FAM\n1 CHIL @I5@\n1 CHIL @I6@\n");

        let children = resolver.resolve_references(&fam, Link::Chil).await.unwrap();
        let ids: Vec<_> = children.iter().map(|r| r.id().unwrap()).collect();
        assert_eq!(ids, vec!["I5", "I6"]);
    }

    #[tokio::test]
    async fn test_resolve_references_skips_missing() {
        let store = MemoryStore::new().with(RecordKind::Individual, "I2", "0 @I2@ INDI\n");
        let resolver = Resolver::new(store);
        let fam = source("0 @F1@ FAM\n1 CHIL @I1@\n1 CHIL @I2@\n1 CHIL @@\n");

        let children = resolver.resolve_references(&fam, Link::Chil).await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id(), Some("I2"));
    }

    #[tokio::test]
    async fn test_resolve_references_only_immediate_children() {
        let store = MemoryStore::new().with(RecordKind::Family, "F1", "0 @F1@ FAM\n");
        let resolver = Resolver::new(store);
        let indi = source("0 @I1@ INDI\n1 EVEN\n2 FAMS @F1@\n");

        let families = resolver.resolve_references(&indi, Link::Fams).await.unwrap();
        assert!(families.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_references_fills_missing_xref() {
        let store = MemoryStore::new().with(RecordKind::Family, "F1", "0 FAM\n1 HUSB @I1@\n");
        let resolver = Resolver::new(store);
        let indi = source("0 @I1@ INDI\n1 FAMS @F1@\n");

        let families = resolver.resolve_references(&indi, Link::Fams).await.unwrap();
        assert_eq!(families[0].id(), Some("F1"));
    }

    #[tokio::test]
    async fn test_resolve_references_wrong_kind_is_parse_error() {
        let store = MemoryStore::new().with(RecordKind::Family, "F1", "0 @F1@ INDI\n");
        let resolver = Resolver::new(store);
        let indi = source("0 @I1@ INDI\n1 FAMC @F1@\n");

        let err = resolver.resolve_references(&indi, Link::Famc).await.unwrap_err();
        assert!(matches!(err, GedviewError::Parse(_)));
        assert!(err.to_string().contains("family F1"));
    }
}
