//! Text -> Document parser.

use crate::document::{Document, Entry, Section, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CfgParseError {
    #[error("line {0}: unterminated section header '{1}'")]
    UnterminatedHeader(usize, String),
    #[error("line {0}: empty section name")]
    EmptySectionName(usize),
    #[error("line {0}: subsection '{1}' outside any section")]
    OrphanSubsection(usize, String),
    #[error("line {0}: entry '{1}' outside any section")]
    OrphanEntry(usize, String),
    #[error("line {0}: expected 'key = value', got '{1}'")]
    MalformedEntry(usize, String),
}

/// Parse configuration text into a [`Document`].
///
/// Full-line `#` comments and blank lines are skipped. Section and entry
/// order is preserved exactly as written.
pub fn parse(text: &str) -> Result<Document, CfgParseError> {
    let mut doc = Document::default();
    // Entries attach to the last subsection of the last section while
    // this is set, otherwise to the last section directly.
    let mut in_subsection = false;

    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("[[") {
            let name = rest
                .strip_suffix("]]")
                .ok_or_else(|| CfgParseError::UnterminatedHeader(lineno, line.to_string()))?
                .trim();
            if name.is_empty() {
                return Err(CfgParseError::EmptySectionName(lineno));
            }
            let parent = doc
                .sections
                .last_mut()
                .ok_or_else(|| CfgParseError::OrphanSubsection(lineno, name.to_string()))?;
            parent.subsections.push(Section::new(name));
            in_subsection = true;
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or_else(|| CfgParseError::UnterminatedHeader(lineno, line.to_string()))?
                .trim();
            if name.is_empty() {
                return Err(CfgParseError::EmptySectionName(lineno));
            }
            doc.sections.push(Section::new(name));
            in_subsection = false;
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| CfgParseError::MalformedEntry(lineno, line.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CfgParseError::MalformedEntry(lineno, line.to_string()));
        }

        let entry = Entry {
            key: key.to_string(),
            value: parse_value(value.trim()),
        };

        let section = doc
            .sections
            .last_mut()
            .ok_or_else(|| CfgParseError::OrphanEntry(lineno, key.to_string()))?;
        match section.subsections.last_mut() {
            Some(sub) if in_subsection => sub.entries.push(entry),
            _ => section.entries.push(entry),
        }
    }

    Ok(doc)
}

/// Parse the right-hand side of an entry.
///
/// A value containing an unquoted comma is a list; items are trimmed and
/// unquoted individually. A trailing comma yields a one-element list,
/// which is how a single-item list is written.
fn parse_value(raw: &str) -> Value {
    let parts = split_unquoted_commas(raw);
    if parts.len() == 1 && !raw.ends_with(',') {
        return Value::Scalar(unquote(parts[0]).to_string());
    }

    let items: Vec<String> = parts
        .into_iter()
        .map(|p| unquote(p).to_string())
        .filter(|p| !p.is_empty())
        .collect();
    Value::List(items)
}

/// Split on commas that are not inside single or double quotes.
fn split_unquoted_commas(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (i, c) in raw.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, ',') => {
                parts.push(raw[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(raw[start..].trim());
    parts
}

/// Strip one layer of matching single or double quotes.
fn unquote(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        if (bytes[0] == b'"' && bytes[s.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[s.len() - 1] == b'\'')
        {
            return &s[1..s.len() - 1];
        }
    }
    s
}
