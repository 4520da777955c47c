//! Per-skeleton configuration: `.kickstart.toml`
//!
//! Every field is optional. A skeleton without the file behaves exactly like
//! the shipped template:
//!
//! ```toml
//! package_type = "typo3-cms-extension"
//! placeholder_namespace = 'GrossbergerGeorg\KickstartExtension\'
//! default_license = "GPL-3.0-or-later"
//!
//! [files]
//! manifest = "composer.json"
//! metadata = "ext_emconf.php"
//! lock = "composer.lock"
//! installer = "Classes/Installer.php"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::identifiers::{License, Namespace};
use crate::paths::{self, SkeletonPaths};

/// Settings that shape a run
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KickstartConfig {
    /// Written to the manifest's `type`
    #[serde(default = "default_package_type")]
    pub package_type: String,
    /// Namespace prefix shipped in the template, replaced by the derived one
    #[serde(default = "default_placeholder_namespace")]
    pub placeholder_namespace: String,
    /// Preselected menu entry
    #[serde(default = "default_license")]
    pub default_license: String,
    #[serde(default)]
    pub files: FilesSection,
}

/// File names relative to the skeleton root
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesSection {
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_metadata")]
    pub metadata: String,
    #[serde(default = "default_lock")]
    pub lock: String,
    #[serde(default = "default_installer")]
    pub installer: String,
}

fn default_package_type() -> String {
    "typo3-cms-extension".to_string()
}
fn default_placeholder_namespace() -> String {
    "GrossbergerGeorg\\KickstartExtension\\".to_string()
}
fn default_license() -> String {
    License::default().label().to_string()
}
fn default_manifest() -> String {
    paths::MANIFEST.to_string()
}
fn default_metadata() -> String {
    paths::METADATA.to_string()
}
fn default_lock() -> String {
    paths::LOCK.to_string()
}
fn default_installer() -> String {
    paths::INSTALLER.to_string()
}

impl Default for FilesSection {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            metadata: default_metadata(),
            lock: default_lock(),
            installer: default_installer(),
        }
    }
}

impl Default for KickstartConfig {
    fn default() -> Self {
        Self {
            package_type: default_package_type(),
            placeholder_namespace: default_placeholder_namespace(),
            default_license: default_license(),
            files: FilesSection::default(),
        }
    }
}

impl KickstartConfig {
    /// Load `.kickstart.toml` from the skeleton root, or defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded kickstart config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.license()
            .with_context(|| format!("Invalid default_license in {}", paths::CONFIG_FILE))?;
        Ok(())
    }

    /// The preselected license
    pub fn license(&self) -> Result<License> {
        Ok(License::from_choice(&self.default_license)?)
    }

    pub fn placeholder_namespace(&self) -> Namespace {
        Namespace::from_prefix(self.placeholder_namespace.as_str())
    }

    /// Resolve file locations under `root`
    pub fn paths(&self, root: &Path) -> SkeletonPaths {
        SkeletonPaths {
            root: root.to_path_buf(),
            manifest: root.join(&self.files.manifest),
            metadata: root.join(&self.files.metadata),
            lock: root.join(&self.files.lock),
            installer: root.join(&self.files.installer),
        }
    }
}
