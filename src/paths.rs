//! Single source of truth for the skeleton's filesystem layout.
//!
//! This module defines WHERE things live. It has no I/O and no validation.
//! File names can be overridden in `.kickstart.toml` (see [`crate::config`]);
//! the defaults below match the shipped skeleton.
//!
//! ```text
//! {skeleton}/
//! ├── .kickstart.toml          # Optional overrides (read only)
//! ├── composer.json            # Package manifest (rewritten)
//! ├── composer.lock            # Lock file (deleted)
//! ├── ext_emconf.php           # Extension metadata (rewritten)
//! └── Classes/
//!     └── Installer.php        # Single-use installer hook (deleted)
//! ```

use std::path::{Path, PathBuf};

/// Optional configuration: `.kickstart.toml`
pub const CONFIG_FILE: &str = ".kickstart.toml";

/// Package manifest: `composer.json`
pub const MANIFEST: &str = "composer.json";

/// Lock file removed after setup: `composer.lock`
pub const LOCK: &str = "composer.lock";

/// Extension metadata: `ext_emconf.php`
pub const METADATA: &str = "ext_emconf.php";

/// Installer hook removed after setup: `Classes/Installer.php`
pub const INSTALLER: &str = "Classes/Installer.php";

/// Config file for a skeleton: `{root}/.kickstart.toml`
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolved locations of every file a run touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonPaths {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub metadata: PathBuf,
    pub lock: PathBuf,
    pub installer: PathBuf,
}

impl SkeletonPaths {
    /// Default layout under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(MANIFEST),
            metadata: root.join(METADATA),
            lock: root.join(LOCK),
            installer: root.join(INSTALLER),
            root,
        }
    }

    /// Files removed by cleanup, in deletion order
    pub fn cleanup_targets(&self) -> [&Path; 2] {
        [&self.lock, &self.installer]
    }
}
