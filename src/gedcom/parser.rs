//! Line-oriented GEDCOM parser.

use regex::Regex;
use std::sync::OnceLock;

use super::{Record, Tag};
use crate::error::{GedviewError, Result};

// LEVEL [@XREF@] TAG [VALUE]; the value is everything after one delimiter space.
fn line_regex() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2}) +(?:(@[^@]+@) +)?([A-Za-z0-9_]+)(?: (.*))?$")
            .expect("Invalid GEDCOM line pattern")
    })
}

/// Parse GEDCOM text into its level-0 records, in document order.
///
/// `CONC` and `CONT` lines are folded into the value of the record they
/// continue and never appear as children.
pub fn parse(text: &str) -> Result<Vec<Record>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut roots = Vec::new();
    // stack[n] is the open record at level n
    let mut stack: Vec<Record> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let caps = line_regex().captures(line).ok_or_else(|| {
            GedviewError::Parse(format!("line {}: not a GEDCOM line: {:?}", line_no, line))
        })?;

        let level: usize = caps[1]
            .parse()
            .map_err(|_| GedviewError::Parse(format!("line {}: bad level", line_no)))?;
        if stack.is_empty() && level != 0 {
            return Err(GedviewError::Parse(format!(
                "line {}: first record must be level 0, found level {}",
                line_no, level
            )));
        }
        if level > stack.len() {
            return Err(GedviewError::Parse(format!(
                "line {}: level {} follows level {}",
                line_no,
                level,
                stack.len() - 1
            )));
        }

        let raw_tag = &caps[3];
        let value = caps.get(4).map(|m| m.as_str()).unwrap_or("");

        close_to(level, &mut stack, &mut roots);

        if raw_tag.eq_ignore_ascii_case("CONC") || raw_tag.eq_ignore_ascii_case("CONT") {
            let parent = stack.last_mut().ok_or_else(|| {
                GedviewError::Parse(format!("line {}: {} at level 0", line_no, raw_tag))
            })?;
            if raw_tag.eq_ignore_ascii_case("CONT") {
                parent.append_value("\n");
            }
            parent.append_value(value);
            continue;
        }

        let xref = caps.get(2).map(|m| m.as_str().to_string());
        stack.push(Record::new(Tag::parse(raw_tag), xref, value.to_string()));
    }

    close_to(0, &mut stack, &mut roots);

    Ok(roots)
}

/// Pop open records until `depth` remain, attaching each to its parent.
fn close_to(depth: usize, stack: &mut Vec<Record>, roots: &mut Vec<Record>) {
    while stack.len() > depth {
        if let Some(done) = stack.pop() {
            match stack.last_mut() {
                Some(parent) => parent.push_child(done),
                None => roots.push(done),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_records() {
        let text = "0 @F1@ FAM\n1 HUSB @I3@\n1 WIFE @I2@\n1 MARR\n2 DATE 1 JUN 1900\n1 CHIL @I1@\n";
        let records = parse(text).unwrap();
        assert_eq!(records.len(), 1);

        let fam = &records[0];
        assert_eq!(*fam.tag(), Tag::Fam);
        assert_eq!(fam.children().len(), 4);
        assert_eq!(fam.children()[2].children()[0].value(), "1 JUN 1900");
    }

    #[test]
    fn test_parse_multiple_level_zero_records() {
        let text = "0 HEAD\n1 CHAR UTF-8\n0 @I1@ INDI\n1 NAME A /B/\n0 TRLR\n";
        let records = parse(text).unwrap();
        let tags: Vec<_> = records.iter().map(|r| r.tag().as_str().to_string()).collect();
        assert_eq!(tags, vec!["HEAD", "INDI", "TRLR"]);
    }

    #[test]
    fn test_parse_conc_and_cont() {
        let text = "0 @N1@ NOTE First part\n1 CONC , same line\n1 CONT second line\n";
        let records = parse(text).unwrap();
        assert_eq!(records[0].value(), "First part, same line\nsecond line");
        assert!(records[0].children().is_empty());
    }

    #[test]
    fn test_parse_tolerates_bom_crlf_and_blank_lines() {
        let text = "\u{feff}0 @I1@ INDI\r\n\r\n1 SEX F\r\n";
        let records = parse(text).unwrap();
        assert_eq!(records[0].first(&Tag::Sex).map(Record::value), Some("F"));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_level_jump() {
        let err = parse("0 @I1@ INDI\n2 DATE 1900\n").unwrap_err();
        assert!(matches!(err, GedviewError::Parse(_)));
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("level 2 follows level 0"));
    }

    #[test]
    fn test_parse_rejects_non_zero_start() {
        let err = parse("\n1 NAME Orphan\n").unwrap_err();
        assert!(matches!(err, GedviewError::Parse(_)));
        assert!(err.to_string().contains("line 2: first record must be level 0"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("this is not gedcom").is_err());
    }
}
