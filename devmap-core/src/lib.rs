//! Core model and resolution logic for custom device parameter mapping.
//!
//! Takes a user-authored configuration of named parameter banks and a
//! device's live parameter list, and resolves the effective display name,
//! value list, and value start points for every matched parameter.

pub mod config;
pub mod identity;
pub mod names;
pub mod resolve;
pub mod types;
pub mod values;

pub use config::{Bank, BankEntry, ConfigError, DeviceConfig, ValueSpec};
pub use identity::{device_identity, MatchMode};
pub use names::{custom_display_name, resolve_name, strip_numeric_prefix, NameMatch};
pub use resolve::{resolve_banks, unmapped_parameters, Resolution};
pub use types::*;
pub use values::{lookup_values, parse_value_list};
