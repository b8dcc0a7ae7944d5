//! Per-device configuration loading with a process-lifetime cache.

use crate::config_path;
use devmap_core::{ConfigError, DeviceConfig};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads device configurations by identity and memoizes successful loads.
///
/// Negative results are never cached: a missing, malformed, or ignored
/// configuration is reported as absent, and a file created or fixed later
/// in the same run is picked up by the next call.
#[derive(Debug, Default)]
pub struct ConfigStore {
    root: PathBuf,
    cache: HashMap<String, DeviceConfig>,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ConfigStore {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the configuration for a device identity.
    ///
    /// `Ok(None)` covers three cases that downstream consumers must not
    /// distinguish: no file, a malformed file, and `Config.Ignore = True`.
    /// Only genuine I/O failures surface as errors.
    pub fn load(&mut self, identity: &str) -> Result<Option<&DeviceConfig>, StoreError> {
        // Split borrow: contains_key then get avoids holding a &mut
        // across the miss path.
        if self.cache.contains_key(identity) {
            log::debug!("config cache hit for '{identity}'");
            return Ok(self.cache.get(identity));
        }

        let path = config_path(&self.root, identity);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config for '{identity}' at {}", path.display());
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let config = match parse_config(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("malformed config {}: {e}", path.display());
                return Ok(None);
            }
        };

        if config.ignore {
            log::debug!("config for '{identity}' is ignored");
            return Ok(None);
        }

        log::debug!("loaded config for '{identity}' ({} banks)", config.banks.len());
        self.cache.insert(identity.to_string(), config);
        Ok(self.cache.get(identity))
    }

    /// Drop a cached configuration so the next load re-reads the file.
    pub fn invalidate(&mut self, identity: &str) {
        self.cache.remove(identity);
    }

    pub fn is_cached(&self, identity: &str) -> bool {
        self.cache.contains_key(identity)
    }
}

#[derive(Debug, Error)]
enum ParseConfigError {
    #[error(transparent)]
    Format(#[from] cfg_format::CfgParseError),
    #[error(transparent)]
    Model(#[from] ConfigError),
}

fn parse_config(text: &str) -> Result<DeviceConfig, ParseConfigError> {
    let doc = cfg_format::parse(text)?;
    Ok(DeviceConfig::from_document(&doc)?)
}
