//! Filesystem layer: per-device configuration store, operator settings,
//! unmapped-parameter reports, and draft-config seeding.
//!
//! Layout under a root directory:
//!
//! ```text
//! <root>/devices.cfg              operator settings
//! <root>/Devices/<identity>.cfg   per-device configurations
//! <root>/Unmapped/<identity>.txt  unmapped-parameter reports
//! ```

pub mod process;
pub mod report;
pub mod seed;
pub mod settings;
pub mod store;

pub use process::{identity_for, process_device, Outcome, ProcessError};
pub use report::write_unmapped_report;
pub use seed::seed_config;
pub use settings::Settings;
pub use store::{ConfigStore, StoreError};

use std::path::{Path, PathBuf};

pub const DEVICES_DIR: &str = "Devices";
pub const UNMAPPED_DIR: &str = "Unmapped";

/// Path of a device's configuration file.
pub fn config_path(root: &Path, identity: &str) -> PathBuf {
    root.join(DEVICES_DIR).join(format!("{identity}.cfg"))
}

/// Path of a device's unmapped-parameter report.
pub fn unmapped_path(root: &Path, identity: &str) -> PathBuf {
    root.join(UNMAPPED_DIR).join(format!("{identity}.txt"))
}
