//! Resolved view models handed to presentation.
//!
//! Values are assembled in one go by the resolver and never mutated
//! afterwards, so there are no setters.

use serde::Serialize;

/// Display string for a missing sex, birth or death value.
pub const UNKNOWN: &str = "Unknown";

/// Scalar facts about a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vitals {
    pub sex: String,
    pub birth: String,
    pub death: String,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            sex: UNKNOWN.to_string(),
            birth: UNKNOWN.to_string(),
            death: UNKNOWN.to_string(),
        }
    }
}

/// Mother and father taken from the first child-family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parents {
    pub mother: Option<Individual>,
    pub father: Option<Individual>,
}

/// A person together with one generation of relations.
///
/// Relations (parents, partners, children) are skeletons: id and name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Individual {
    id: String,
    name: String,
    #[serde(flatten)]
    vitals: Vitals,
    #[serde(skip_serializing_if = "Option::is_none")]
    mother: Option<Box<Individual>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    father: Option<Box<Individual>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    families: Vec<Family>,
}

impl Individual {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vitals: Vitals,
        parents: Parents,
        families: Vec<Family>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vitals,
            mother: parents.mother.map(Box::new),
            father: parents.father.map(Box::new),
            families,
        }
    }

    /// Id and name only; relations are never resolved for a skeleton.
    pub fn skeleton(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Vitals::default(), Parents::default(), Vec::new())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> &str {
        &self.vitals.sex
    }

    pub fn birth(&self) -> &str {
        &self.vitals.birth
    }

    pub fn death(&self) -> &str {
        &self.vitals.death
    }

    pub fn mother(&self) -> Option<&Individual> {
        self.mother.as_deref()
    }

    pub fn father(&self) -> Option<&Individual> {
        self.father.as_deref()
    }

    /// Spousal families in FAMS order.
    pub fn families(&self) -> &[Family] {
        &self.families
    }
}

/// A family the individual is a spouse in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    id: String,
    partner: Option<Individual>,
    children: Vec<Individual>,
}

impl Family {
    pub fn new(id: impl Into<String>, partner: Option<Individual>, children: Vec<Individual>) -> Self {
        Self {
            id: id.into(),
            partner,
            children,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn partner(&self) -> Option<&Individual> {
        self.partner.as_ref()
    }

    pub fn children(&self) -> &[Individual] {
        &self.children
    }
}
