//! Document -> text writer.
//!
//! Rendering is the inverse of [`crate::reader::parse`]: parsing the
//! output reproduces the document, including section and entry order.

use crate::document::{Document, Entry, Value};
use std::fmt::Write as _;

/// Render a [`Document`] to configuration text.
pub fn write(doc: &Document) -> String {
    let mut out = String::new();
    for section in &doc.sections {
        let _ = writeln!(out, "[{}]", section.name);
        write_entries(&mut out, &section.entries);
        for sub in &section.subsections {
            let _ = writeln!(out, "[[{}]]", sub.name);
            write_entries(&mut out, &sub.entries);
        }
    }
    out
}

fn write_entries(out: &mut String, entries: &[Entry]) {
    for entry in entries {
        match &entry.value {
            Value::Scalar(s) => {
                let _ = writeln!(out, "{} = {}", entry.key, quote_if_needed(s));
            }
            Value::List(items) => {
                let rendered: Vec<String> =
                    items.iter().map(|i| quote_if_needed(i)).collect();
                // Zero- and one-element lists keep a trailing comma so
                // they read back as lists, not scalars.
                let trailing = if items.len() <= 1 { "," } else { "" };
                let _ = writeln!(out, "{} = {}{}", entry.key, rendered.join(", "), trailing);
            }
        }
    }
}

/// Quote an item when it would otherwise change meaning on re-parse.
fn quote_if_needed(s: &str) -> String {
    if s.contains(',') || s.starts_with('#') || s != s.trim() {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}
