//! End-to-end processing of one device.

use crate::report::write_unmapped_report;
use crate::seed::seed_config;
use crate::settings::Settings;
use crate::store::{ConfigStore, StoreError};
use devmap_core::{
    device_identity, resolve_banks, unmapped_parameters, DeviceDescriptor, Resolution,
};
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("I/O error writing report: {0}")]
    Report(#[from] io::Error),
}

/// What happened for one device.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The device has no usable identity (or is filtered out); nothing
    /// was done.
    Skipped,
    /// No configuration was found. A draft may have been seeded, and the
    /// full parameter list reported unmapped, per the settings.
    NotConfigured {
        identity: String,
        seeded: Option<PathBuf>,
    },
    /// A configuration was found and resolved.
    Resolved {
        identity: String,
        resolution: Resolution,
        unmapped: Vec<String>,
    },
}

/// Derive a device's identity using the matching mode the settings
/// select for its display name.
pub fn identity_for(device: &DeviceDescriptor, settings: &Settings) -> Option<String> {
    let base = device
        .class_display_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&device.class_name);
    device_identity(device, settings.match_mode(base))
}

/// Resolve one device against its stored configuration, with side
/// effects gated by the operator settings.
///
/// With a configuration present: resolve all banks, then write or remove
/// the unmapped report. Without one: optionally seed a draft, and report
/// every matchable parameter as unmapped.
pub fn process_device(
    device: &DeviceDescriptor,
    store: &mut ConfigStore,
    settings: &Settings,
) -> Result<Outcome, ProcessError> {
    if settings.plugin_only && device.class_name != "PluginDevice" {
        log::debug!("skipping non-plugin device class '{}'", device.class_name);
        return Ok(Outcome::Skipped);
    }

    let Some(identity) = identity_for(device, settings) else {
        return Ok(Outcome::Skipped);
    };

    let root = store.root().to_path_buf();
    let Some(config) = store.load(&identity)? else {
        log::debug!("no config found for '{identity}'");
        let seeded = if settings.seed_new_devices
            && seed_config(&root, &identity, device, settings.default_ignore)?
        {
            Some(crate::config_path(&root, &identity))
        } else {
            None
        };

        if settings.write_unmapped {
            let all = unmapped_parameters(device, &BTreeSet::new());
            write_unmapped_report(&root, &identity, &all)?;
        }
        return Ok(Outcome::NotConfigured { identity, seeded });
    };

    log::debug!("config found for '{identity}'");
    let resolution = resolve_banks(device, config);
    let unmapped = unmapped_parameters(device, &resolution.used_names);

    if settings.write_unmapped {
        write_unmapped_report(&root, &identity, &unmapped)?;
    }

    Ok(Outcome::Resolved {
        identity,
        resolution,
        unmapped,
    })
}
