//! Device configuration model and its mapping to the on-disk format.

use cfg_format::{Document, Section, Value};
use thiserror::Error;

pub const SECTION_BANKS: &str = "Banks";
pub const SECTION_PARAMETER_VALUES: &str = "ParameterValues";
pub const SECTION_PARAMETER_VALUE_TYPES: &str = "ParameterValueTypes";
pub const SECTION_CONFIG: &str = "Config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing [{SECTION_BANKS}] section")]
    MissingBanks,
}

/// A loaded per-device configuration. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceConfig {
    /// Bank sections in file order.
    pub banks: Vec<Bank>,
    /// Per-token value specs, in file order.
    pub parameter_values: Vec<(String, ValueSpec)>,
    /// Named, reusable value lists.
    pub value_types: Vec<(String, Vec<String>)>,
    /// An ignored configuration is treated as absent by every consumer.
    pub ignore: bool,
    pub cache: bool,
}

/// A named, ordered group of token -> directive entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub name: String,
    pub entries: Vec<BankEntry>,
}

/// One configured bank entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankEntry {
    /// The name the user wrote to reference a device parameter.
    pub token: String,
    /// Controls the resolved display name: empty keeps the original
    /// name, `*` splits it on word case, anything else is used verbatim.
    pub directive: String,
}

/// The value side of a `ParameterValues` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSpec {
    /// A literal list of value labels, optionally with `||`-separated
    /// start points.
    Inline(Vec<String>),
    /// A reference into `ParameterValueTypes`.
    Alias(String),
}

impl DeviceConfig {
    /// Build a configuration from a parsed document.
    ///
    /// Only `[Banks]` is required; the other sections default to empty
    /// (and `Ignore`/`Cache` to false).
    pub fn from_document(doc: &Document) -> Result<DeviceConfig, ConfigError> {
        let banks_section = doc.section(SECTION_BANKS).ok_or(ConfigError::MissingBanks)?;

        let banks = banks_section
            .subsections
            .iter()
            .map(|sub| Bank {
                name: sub.name.clone(),
                entries: sub
                    .entries
                    .iter()
                    .map(|e| BankEntry {
                        token: e.key.clone(),
                        directive: scalar_or_joined(&e.value),
                    })
                    .collect(),
            })
            .collect();

        let parameter_values = doc
            .section(SECTION_PARAMETER_VALUES)
            .map(|s| {
                s.entries
                    .iter()
                    .map(|e| {
                        let spec = match &e.value {
                            Value::Scalar(alias) => ValueSpec::Alias(alias.clone()),
                            Value::List(items) => ValueSpec::Inline(items.clone()),
                        };
                        (e.key.clone(), spec)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let value_types = doc
            .section(SECTION_PARAMETER_VALUE_TYPES)
            .map(|s| {
                s.entries
                    .iter()
                    .map(|e| {
                        let items = match &e.value {
                            Value::Scalar(one) => vec![one.clone()],
                            Value::List(items) => items.clone(),
                        };
                        (e.key.clone(), items)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let config_section = doc.section(SECTION_CONFIG);
        let flag = |key: &str| {
            config_section
                .and_then(|s| s.get_bool(key))
                .unwrap_or(false)
        };

        Ok(DeviceConfig {
            banks,
            parameter_values,
            value_types,
            ignore: flag("Ignore"),
            cache: flag("Cache"),
        })
    }

    /// Render the configuration back to a document, preserving bank and
    /// entry order. Used by the seeder.
    pub fn to_document(&self) -> Document {
        let mut banks = Section::new(SECTION_BANKS);
        for bank in &self.banks {
            let mut sub = Section::new(bank.name.clone());
            for entry in &bank.entries {
                sub.push_scalar(entry.token.clone(), entry.directive.clone());
            }
            banks.subsections.push(sub);
        }

        let mut values = Section::new(SECTION_PARAMETER_VALUES);
        for (token, spec) in &self.parameter_values {
            match spec {
                ValueSpec::Inline(items) => values.push_list(token.clone(), items.clone()),
                ValueSpec::Alias(alias) => values.push_scalar(token.clone(), alias.clone()),
            }
        }

        let mut value_types = Section::new(SECTION_PARAMETER_VALUE_TYPES);
        for (alias, items) in &self.value_types {
            value_types.push_list(alias.clone(), items.clone());
        }

        let mut config = Section::new(SECTION_CONFIG);
        config.push_scalar("Cache", bool_str(self.cache));
        config.push_scalar("Ignore", bool_str(self.ignore));

        Document {
            sections: vec![banks, values, value_types, config],
        }
    }

    /// Look up a named value-list alias.
    pub fn value_type(&self, alias: &str) -> Option<&[String]> {
        self.value_types
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, items)| items.as_slice())
    }

    /// Look up the value spec for a configured token.
    pub fn values_for(&self, token: &str) -> Option<&ValueSpec> {
        self.parameter_values
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, spec)| spec)
    }
}

fn bool_str(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

/// A directive is normally a scalar; a list directive (a user writing
/// commas) collapses back to its comma-joined text.
fn scalar_or_joined(value: &Value) -> String {
    match value {
        Value::Scalar(s) => s.clone(),
        Value::List(items) => items.join(", "),
    }
}
