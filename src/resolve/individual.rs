//! Assembly of an `Individual` with one generation of relations.

use super::{parse_fetched, Link, Resolver};
use crate::error::Result;
use crate::gedcom::{first_of_kind, format_date, format_name, strip_pointer, Record, RecordKind, Tag};
use crate::model::{Family, Individual, Parents, Vitals, UNKNOWN};
use crate::store::RecordStore;

/// Sex shown when an individual record has no SEX line.
const UNDETERMINED_SEX: &str = "U";

impl<S: RecordStore> Resolver<S> {
    /// Resolve `id` with its parents, spousal families and children.
    ///
    /// Returns `Ok(None)` when the store has no individual record for `id`.
    /// Any store or parse failure along the way fails the whole call.
    pub async fn resolve_individual(&self, id: &str) -> Result<Option<Individual>> {
        let id = strip_pointer(id);
        if id.is_empty() {
            return Ok(None);
        }

        let Some(text) = self.store().fetch(RecordKind::Individual, id).await? else {
            log::debug!("individual {} not found", id);
            return Ok(None);
        };
        let records = parse_fetched(RecordKind::Individual, id, &text)?;
        let Some(record) = first_of_kind(records, RecordKind::Individual) else {
            log::debug!("individual {} has no INDI record", id);
            return Ok(None);
        };

        let root_id = record.id().unwrap_or(id).to_string();
        let vitals = Vitals {
            sex: record
                .first_value_at(&[Tag::Sex])
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| UNDETERMINED_SEX.to_string()),
            birth: event_date(&record, Tag::Birt),
            death: event_date(&record, Tag::Deat),
        };

        let parents = self.resolve_parents(&record).await?;
        let families = self.resolve_spousal_families(&record, &root_id).await?;

        log::info!(
            "Resolved individual {} (mother: {}, father: {}, families: {})",
            root_id,
            parents.mother.is_some(),
            parents.father.is_some(),
            families.len()
        );

        Ok(Some(Individual::new(root_id, display_name(&record), vitals, parents, families)))
    }

    /// Mother and father from the first child-family only.
    async fn resolve_parents(&self, individual: &Record) -> Result<Parents> {
        let Some(family) = first(self.resolve_references(individual, Link::Famc).await?) else {
            return Ok(Parents::default());
        };

        let mother = first(self.resolve_references(&family, Link::Wife).await?);
        let father = first(self.resolve_references(&family, Link::Husb).await?);

        Ok(Parents {
            mother: mother.as_ref().map(skeleton),
            father: father.as_ref().map(skeleton),
        })
    }

    async fn resolve_spousal_families(&self, individual: &Record, individual_id: &str) -> Result<Vec<Family>> {
        let family_records = self.resolve_references(individual, Link::Fams).await?;

        let mut families = Vec::with_capacity(family_records.len());
        for family in &family_records {
            let partner = self.resolve_partner(family, individual_id).await?;
            let children = self
                .resolve_references(family, Link::Chil)
                .await?
                .iter()
                .map(skeleton)
                .collect();

            families.push(Family::new(
                family.id().unwrap_or_default(),
                partner,
                children,
            ));
        }

        Ok(families)
    }

    /// The other spouse in `family`.
    ///
    /// If the first WIFE is the individual, the partner is the first HUSB;
    /// otherwise the partner is that WIFE. A family with a HUSB but no WIFE
    /// therefore yields no partner for its husband.
    async fn resolve_partner(&self, family: &Record, individual_id: &str) -> Result<Option<Individual>> {
        let wife = first(self.resolve_references(family, Link::Wife).await?);

        match wife {
            Some(wife) if wife.id() == Some(individual_id) => {
                let husband = first(self.resolve_references(family, Link::Husb).await?);
                Ok(husband.as_ref().map(skeleton))
            }
            other => Ok(other.as_ref().map(skeleton)),
        }
    }
}

fn first(records: Vec<Record>) -> Option<Record> {
    records.into_iter().next()
}

fn skeleton(record: &Record) -> Individual {
    Individual::skeleton(record.id().unwrap_or_default(), display_name(record))
}

fn display_name(record: &Record) -> String {
    record
        .first_value_at(&[Tag::Name])
        .map(format_name)
        .unwrap_or_default()
}

fn event_date(record: &Record, event: Tag) -> String {
    record
        .first_value_at(&[event, Tag::Date])
        .map(format_date)
        .unwrap_or_else(|| UNKNOWN.to_string())
}
