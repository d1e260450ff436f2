//! HTML pages for resolved individuals.

use std::fmt::Write;

use url::form_urlencoded;

use crate::model::{Family, Individual};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn person_link(person: &Individual) -> String {
    let name = if person.name().is_empty() { person.id() } else { person.name() };
    let query: String = form_urlencoded::byte_serialize(person.id().as_bytes()).collect();
    format!("<a href=\"/?i_id={}\">{}</a>", escape(&query), escape(name))
}

fn family_section(out: &mut String, family: &Family) {
    let _ = writeln!(out, "<section class=\"family\" id=\"{}\">", escape(family.id()));
    match family.partner() {
        Some(partner) => {
            let _ = writeln!(out, "<p>Partner: {}</p>", person_link(partner));
        }
        None => out.push_str("<p>Partner: Unknown</p>\n"),
    }
    if family.children().is_empty() {
        out.push_str("<p>No children recorded.</p>\n");
    } else {
        out.push_str("<ul class=\"children\">\n");
        for child in family.children() {
            let _ = writeln!(out, "<li>{}</li>", person_link(child));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</section>\n");
}

/// Full page for one resolved individual.
pub fn individual_page(individual: &Individual) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(individual.name()));
    let _ = writeln!(
        body,
        "<dl>\n<dt>ID</dt><dd>{}</dd>\n<dt>Sex</dt><dd>{}</dd>\n<dt>Born</dt><dd>{}</dd>\n<dt>Died</dt><dd>{}</dd>\n</dl>",
        escape(individual.id()),
        escape(individual.sex()),
        escape(individual.birth()),
        escape(individual.death())
    );

    body.push_str("<h2>Parents</h2>\n<ul class=\"parents\">\n");
    for (label, parent) in [("Mother", individual.mother()), ("Father", individual.father())] {
        match parent {
            Some(parent) => {
                let _ = writeln!(body, "<li>{}: {}</li>", label, person_link(parent));
            }
            None => {
                let _ = writeln!(body, "<li>{}: Unknown</li>", label);
            }
        }
    }
    body.push_str("</ul>\n");

    body.push_str("<h2>Families</h2>\n");
    if individual.families().is_empty() {
        body.push_str("<p>No families recorded.</p>\n");
    }
    for family in individual.families() {
        family_section(&mut body, family);
    }

    page(individual.name(), &body)
}

/// Page shown when no individual exists for `id`.
pub fn not_found_page(id: &str) -> String {
    page(
        "Not found",
        &format!("<h1>Not found</h1>\n<p>No individual with id <code>{}</code>.</p>\n", escape(id)),
    )
}
