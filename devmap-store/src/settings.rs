//! Operator-facing settings, read from `<root>/devices.cfg`.
//!
//! ```text
//! [Dump]
//! new_devices = True
//! unmapped_parameters = True
//! default_ignore = False
//! [Strict_matching]
//! SuperComp = PARAMETERS
//! OtherPlugin = NAME
//! ```

use devmap_core::MatchMode;
use std::io;
use std::path::Path;

pub const SETTINGS_FILE: &str = "devices.cfg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Seed a draft configuration for devices that have none.
    pub seed_new_devices: bool,
    /// Write (or remove) the unmapped-parameter report.
    pub write_unmapped: bool,
    /// Seeded configurations start with `Ignore = True`.
    pub default_ignore: bool,
    /// Only process devices whose class name is `PluginDevice`.
    pub plugin_only: bool,
    /// Per-device-name identity matching modes.
    pub match_modes: Vec<(String, MatchMode)>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed_new_devices: true,
            write_unmapped: true,
            default_ignore: false,
            plugin_only: false,
            match_modes: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from `<root>/devices.cfg`. A missing or malformed
    /// file yields the defaults.
    pub fn load(root: &Path) -> Settings {
        let path = root.join(SETTINGS_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!("cannot read {}: {e}", path.display());
                }
                return Settings::default();
            }
        };

        let doc = match cfg_format::parse(&text) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("malformed settings {}: {e}", path.display());
                return Settings::default();
            }
        };

        let mut settings = Settings::default();
        if let Some(dump) = doc.section("Dump") {
            if let Some(v) = dump.get_bool("new_devices") {
                settings.seed_new_devices = v;
            }
            if let Some(v) = dump.get_bool("unmapped_parameters") {
                settings.write_unmapped = v;
            }
            if let Some(v) = dump.get_bool("default_ignore") {
                settings.default_ignore = v;
            }
            if let Some(v) = dump.get_bool("plugin_only") {
                settings.plugin_only = v;
            }
        }
        if let Some(matching) = doc.section("Strict_matching") {
            for entry in &matching.entries {
                if let Some(mode) = matching.get_str(&entry.key) {
                    settings
                        .match_modes
                        .push((entry.key.clone(), MatchMode::from_setting(mode)));
                }
            }
        }
        settings
    }

    /// The identity matching mode for a device name.
    pub fn match_mode(&self, device_name: &str) -> MatchMode {
        self.match_modes
            .iter()
            .find(|(name, _)| name == device_name)
            .map_or(MatchMode::Default, |(_, mode)| *mode)
    }
}
