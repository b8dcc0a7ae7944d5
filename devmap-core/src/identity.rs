//! Device identity derivation.
//!
//! The identity is the string key used to locate a device's persisted
//! configuration and its cache entry. It must be deterministic: the same
//! device under the same mode always derives the same identity.

use crate::types::DeviceDescriptor;
use sha2::{Digest, Sha256};

/// How a device class name is disambiguated into an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Class display name alone.
    #[default]
    Default,
    /// Append the instance name, for plugins where one class hosts many
    /// distinct presets.
    Name,
    /// Append a content hash of the sorted parameter-name list, so two
    /// builds of the same plugin with different parameter sets get
    /// separate configurations.
    Parameters,
}

impl MatchMode {
    /// Parse the operator-settings spelling (`NAME` / `PARAMETERS`).
    /// Anything else is the default mode.
    pub fn from_setting(s: &str) -> MatchMode {
        match s {
            "NAME" => MatchMode::Name,
            "PARAMETERS" => MatchMode::Parameters,
            _ => MatchMode::Default,
        }
    }
}

/// Derive the identity for a device, or `None` when the device has no
/// usable name.
pub fn device_identity(device: &DeviceDescriptor, mode: MatchMode) -> Option<String> {
    let base = device
        .class_display_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(device.class_name.as_str());
    if base.is_empty() {
        return None;
    }

    log::debug!(
        "device identity: class_display_name={:?}, class_name={}, name={}, mode={:?}",
        device.class_display_name,
        device.class_name,
        device.name,
        mode
    );

    match mode {
        MatchMode::Default => Some(base.to_string()),
        MatchMode::Name => Some(format!("{}_{}", base, device.name)),
        MatchMode::Parameters => {
            let mut names: Vec<&str> = device
                .matchable_parameters()
                .iter()
                .map(|p| p.original_name.as_str())
                .collect();
            names.sort_unstable();

            let mut hasher = Sha256::new();
            for name in names {
                hasher.update(b".");
                hasher.update(name.as_bytes());
            }
            Some(format!("{}_{:x}", base, hasher.finalize()))
        }
    }
}
