//! Display forms for NAME and DATE values.

/// `"John /Doe/ Jr."` -> `"John Doe Jr."`
pub fn format_name(raw: &str) -> String {
    raw.replace('/', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expand GEDCOM date qualifiers for display.
///
/// `"abt 1900"` -> `"ABOUT 1900"`, `"BET 1900 AND 1910"` -> `"BETWEEN 1900 AND 1910"`.
/// A trailing `(phrase)` is kept verbatim.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let (date_part, phrase) = match raw.find('(') {
        Some(pos) => (&raw[..pos], Some(raw[pos..].trim())),
        None => (raw, None),
    };

    let mut parts: Vec<String> = date_part
        .split_whitespace()
        .map(|token| {
            let upper = token.to_ascii_uppercase();
            match upper.as_str() {
                "ABT" => "ABOUT".to_string(),
                "CAL" => "CALCULATED".to_string(),
                "EST" => "ESTIMATED".to_string(),
                "BEF" => "BEFORE".to_string(),
                "AFT" => "AFTER".to_string(),
                "BET" => "BETWEEN".to_string(),
                "INT" => "INTERPRETED".to_string(),
                _ => upper,
            }
        })
        .collect();

    if let Some(phrase) = phrase {
        parts.push(phrase.to_string());
    }

    parts.join(" ")
}
