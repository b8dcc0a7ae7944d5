//! Bank resolution: the orchestration of name matching, display-name
//! generation, and value-list lookup over a loaded configuration.

use crate::config::DeviceConfig;
use crate::names::{custom_display_name, resolve_name};
use crate::types::{DeviceDescriptor, ResolvedBank, ResolvedParameter};
use crate::values::lookup_values;
use std::collections::BTreeSet;

/// The outcome of resolving a configuration against a device.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    /// Resolved banks in configuration order.
    pub banks: Vec<ResolvedBank>,
    /// Original names of every matched parameter. Input to unmapped
    /// detection.
    pub used_names: BTreeSet<String>,
}

/// Resolve every bank entry of a configuration against a device.
///
/// Banks and entries are processed in configuration order. Unmatched
/// tokens are dropped silently (debug trace only) and contribute nothing
/// to the result.
pub fn resolve_banks(device: &DeviceDescriptor, config: &DeviceConfig) -> Resolution {
    let mut resolution = Resolution::default();

    for bank in &config.banks {
        let mut resolved = ResolvedBank {
            name: bank.name.clone(),
            parameters: Vec::new(),
        };

        for entry in &bank.entries {
            let Some(matched) = resolve_name(&entry.token, &device.parameters) else {
                continue;
            };

            let display_name = custom_display_name(&matched.original_name, &entry.directive);
            // Value lists are keyed by the configured token, not the
            // matched original name.
            let (value_list, start_points) = match lookup_values(config, &entry.token) {
                Some((labels, points)) => (Some(labels), points),
                None => (None, None),
            };

            // For exact and prefix matches this equals the token with its
            // numeric prefix stripped; for loose matches the original
            // name is what the unmapped diff must see.
            resolution.used_names.insert(matched.original_name.clone());
            resolved.parameters.push(ResolvedParameter {
                index: matched.index,
                original_name: matched.original_name,
                display_name,
                value_list,
                start_points,
            });
        }

        resolution.banks.push(resolved);
    }

    log::debug!(
        "resolved {} banks, {} used parameters",
        resolution.banks.len(),
        resolution.used_names.len()
    );
    resolution
}

/// The device parameters never matched by any bank entry, sorted
/// lexicographically. The enable switch at index 0 is excluded.
pub fn unmapped_parameters(device: &DeviceDescriptor, used_names: &BTreeSet<String>) -> Vec<String> {
    let mut unmapped: Vec<String> = device
        .matchable_parameters()
        .iter()
        .map(|p| p.original_name.clone())
        .filter(|name| !used_names.contains(name))
        .collect();
    unmapped.sort();
    unmapped
}
