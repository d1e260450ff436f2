//! GEDCOM record model: a typed tag/value/children tree.
//!
//! Only the tags the resolver inspects get their own `Tag` variant; anything
//! else is carried as `Tag::Other` so no information is dropped while parsing.

mod parser;
mod value;

pub use parser::parse;
pub use value::{format_date, format_name};

use std::fmt;

/// GEDCOM tag of a structural record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Indi,
    Fam,
    Name,
    Sex,
    Birt,
    Deat,
    Date,
    Famc,
    Fams,
    Wife,
    Husb,
    Chil,
    Other(String),
}

impl Tag {
    pub fn parse(raw: &str) -> Tag {
        match raw.to_ascii_uppercase().as_str() {
            "INDI" => Tag::Indi,
            "FAM" => Tag::Fam,
            "NAME" => Tag::Name,
            "SEX" => Tag::Sex,
            "BIRT" => Tag::Birt,
            "DEAT" => Tag::Deat,
            "DATE" => Tag::Date,
            "FAMC" => Tag::Famc,
            "FAMS" => Tag::Fams,
            "WIFE" => Tag::Wife,
            "HUSB" => Tag::Husb,
            "CHIL" => Tag::Chil,
            _ => Tag::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tag::Indi => "INDI",
            Tag::Fam => "FAM",
            Tag::Name => "NAME",
            Tag::Sex => "SEX",
            Tag::Birt => "BIRT",
            Tag::Deat => "DEAT",
            Tag::Date => "DATE",
            Tag::Famc => "FAMC",
            Tag::Fams => "FAMS",
            Tag::Wife => "WIFE",
            Tag::Husb => "HUSB",
            Tag::Chil => "CHIL",
            Tag::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a top-level record that can be fetched from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Individual,
    Family,
}

impl RecordKind {
    /// Level-0 tag carried by records of this kind
    pub fn tag(self) -> Tag {
        match self {
            RecordKind::Individual => Tag::Indi,
            RecordKind::Family => Tag::Fam,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Individual => "individual",
            RecordKind::Family => "family",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a parsed GEDCOM tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    tag: Tag,
    xref: Option<String>,
    value: String,
    children: Vec<Record>,
}

impl Record {
    pub(crate) fn new(tag: Tag, xref: Option<String>, value: String) -> Self {
        Self {
            tag,
            xref,
            value,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The record's own `@ID@` label, delimiters included.
    pub fn xref(&self) -> Option<&str> {
        self.xref.as_deref()
    }

    /// The record's id with pointer delimiters stripped.
    pub fn id(&self) -> Option<&str> {
        self.xref().map(strip_pointer).filter(|id| !id.is_empty())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[Record] {
        &self.children
    }

    /// Immediate sub-records carrying `tag`, in document order.
    pub fn children_with<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a Record> + 'a {
        self.children.iter().filter(move |child| child.tag == *tag)
    }

    /// First immediate sub-record carrying `tag`.
    pub fn first(&self, tag: &Tag) -> Option<&Record> {
        self.children.iter().find(|child| child.tag == *tag)
    }

    /// Follow the first match of each tag in `path` and return the final value.
    ///
    /// `record.first_value_at(&[Tag::Birt, Tag::Date])` is the value of the
    /// first DATE under the first BIRT. Empty values count as absent.
    pub fn first_value_at(&self, path: &[Tag]) -> Option<&str> {
        let mut current = self;
        for tag in path {
            current = current.first(tag)?;
        }
        Some(current.value()).filter(|v| !v.trim().is_empty())
    }

    /// Label a record that was stored without its own xref.
    pub(crate) fn ensure_xref(&mut self, id: &str) {
        if self.xref.is_none() {
            self.xref = Some(format!("@{}@", id));
        }
    }

    pub(crate) fn push_child(&mut self, child: Record) {
        self.children.push(child);
    }

    pub(crate) fn append_value(&mut self, text: &str) {
        self.value.push_str(text);
    }
}

/// Strip leading and trailing `@` delimiters (and surrounding whitespace).
pub fn strip_pointer(raw: &str) -> &str {
    raw.trim().trim_matches('@')
}

/// Top-level records of `kind`, in document order.
pub fn records_of_kind(records: &[Record], kind: RecordKind) -> impl Iterator<Item = &Record> {
    let tag = kind.tag();
    records.iter().filter(move |r| *r.tag() == tag)
}

/// Take ownership of the first top-level record of `kind`.
pub fn first_of_kind(records: Vec<Record>, kind: RecordKind) -> Option<Record> {
    let tag = kind.tag();
    records.into_iter().find(|r| *r.tag() == tag)
}
