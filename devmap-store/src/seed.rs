//! Draft configuration seeding for unknown devices.

use crate::{config_path, StoreError, DEVICES_DIR};
use devmap_core::{Bank, BankEntry, DeviceConfig, DeviceDescriptor};
use std::path::Path;

/// Parameters per seeded bank.
pub const PARAMS_PER_BANK: usize = 8;

/// Write a draft configuration for a device that has none.
///
/// Matchable parameters are sorted by name and partitioned into banks of
/// [`PARAMS_PER_BANK`], each entry mapping a name to itself so the file
/// is immediately valid and editable. Returns `false` without touching
/// anything if a file already exists for the identity; an existing file
/// is never overwritten.
pub fn seed_config(
    root: &Path,
    identity: &str,
    device: &DeviceDescriptor,
    default_ignore: bool,
) -> Result<bool, StoreError> {
    let path = config_path(root, identity);
    if path.exists() {
        log::debug!("not seeding '{identity}': {} exists", path.display());
        return Ok(false);
    }

    let mut names: Vec<&str> = device
        .matchable_parameters()
        .iter()
        .map(|p| p.original_name.as_str())
        .collect();
    names.sort_unstable();

    let banks = names
        .chunks(PARAMS_PER_BANK)
        .enumerate()
        .map(|(i, chunk)| Bank {
            name: format!("Bank {}", i + 1),
            entries: chunk
                .iter()
                .map(|name| BankEntry {
                    token: (*name).to_string(),
                    directive: (*name).to_string(),
                })
                .collect(),
        })
        .collect();

    let config = DeviceConfig {
        banks,
        ignore: default_ignore,
        ..DeviceConfig::default()
    };

    std::fs::create_dir_all(root.join(DEVICES_DIR)).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, cfg_format::write(&config.to_document())).map_err(|source| {
        StoreError::Io {
            path: path.clone(),
            source,
        }
    })?;

    log::debug!("seeded draft config at {}", path.display());
    Ok(true)
}
