//! Configured-token matching and display-name generation.

use crate::types::ParameterInfo;
use regex::Regex;
use std::sync::OnceLock;

/// A successful token match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// Position in the device's full parameter list.
    pub index: usize,
    pub original_name: String,
}

fn numeric_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+_").unwrap())
}

/// Strip a leading `<digits>_` token, if present.
///
/// Configured tokens may carry a positional prefix (`3_Gain`); the bare
/// name is what unmapped detection compares against.
pub fn strip_numeric_prefix(token: &str) -> &str {
    match numeric_prefix_re().find(token) {
        Some(m) => &token[m.end()..],
        None => token,
    }
}

/// Match one configured token against the device's parameter list.
///
/// Candidates are scanned in device order starting at index 1 (index 0 is
/// the reserved enable switch). For each candidate, in order:
///
/// 1. exact equality with the original name,
/// 2. `<index>_` + original name, where `<index>` is the candidate's
///    1-based position among matchable parameters,
/// 3. the legacy loose rule (see [`loose_suffix_match`]).
///
/// First match wins. No match returns `None`; a stale token is not an
/// error.
pub fn resolve_name(token: &str, parameters: &[ParameterInfo]) -> Option<NameMatch> {
    for (index, parameter) in parameters.iter().enumerate().skip(1) {
        let original = parameter.original_name.as_str();

        let exact = token == original;
        let prefixed = token
            .strip_prefix(&format!("{index}_"))
            .is_some_and(|rest| rest == original);

        if exact || prefixed || loose_suffix_match(token, original) {
            log::debug!("token '{token}' matched parameter {index} '{original}'");
            return Some(NameMatch {
                index,
                original_name: original.to_string(),
            });
        }
    }

    log::debug!("token '{token}' matched no parameter");
    None
}

/// Legacy fallback rule: the token starts with `<digits>_`, then at least
/// one word character, then the original name as a literal substring;
/// trailing characters are ignored.
///
/// This is deliberately permissive and can match unintended substrings
/// (e.g. token `1_xFreqX` matches original name `Freq`). Configurations
/// in the field rely on the looseness, so it is preserved as-is rather
/// than tightened.
pub fn loose_suffix_match(token: &str, original_name: &str) -> bool {
    if original_name.is_empty() {
        return false;
    }
    let Some(prefix) = numeric_prefix_re().find(token) else {
        return false;
    };
    let tail = &token[prefix.end()..];

    // The original name must appear after at least one word character.
    tail.match_indices(original_name).any(|(pos, _)| {
        pos > 0 && tail[..pos].chars().all(|c| c.is_alphanumeric() || c == '_')
    })
}

/// Compute the display name for a matched parameter.
///
/// An empty directive keeps the original name, `*` splits it into words
/// at case boundaries, and anything else is used verbatim.
pub fn custom_display_name(original_name: &str, directive: &str) -> String {
    match directive {
        "" => original_name.to_string(),
        "*" => split_words_by_case(original_name),
        other => other.to_string(),
    }
}

/// Split a camel-case name into space-separated words.
///
/// An uppercase run stays together except for a final letter that starts
/// a new lowercase word, so `FMSynth` becomes `FM Synth`, not
/// `F M Synth`.
fn split_words_by_case(name: &str) -> String {
    static UPPER_RUN: OnceLock<Regex> = OnceLock::new();
    static UPPER_WORD: OnceLock<Regex> = OnceLock::new();
    let upper_run = UPPER_RUN.get_or_init(|| Regex::new(r"([A-Z]+)").unwrap());
    let upper_word = UPPER_WORD.get_or_init(|| Regex::new(r"([A-Z][a-z]+)").unwrap());

    let spaced = upper_run.replace_all(name, " $1");
    let spaced = upper_word.replace_all(&spaced, " $1");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_acronym_runs_together() {
        assert_eq!(split_words_by_case("FMSynth"), "FM Synth");
        assert_eq!(split_words_by_case("LFORate"), "LFO Rate");
    }

    #[test]
    fn split_collapses_existing_whitespace() {
        assert_eq!(split_words_by_case("Dry  Wet"), "Dry Wet");
    }
}
