//! Setup guard: has this skeleton already been kickstarted?
//!
//! A finished run leaves no placeholder in either target file and no
//! installer hook. Checking for that replaces the old trick of the installer
//! deleting its own source.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::KickstartConfig;
use crate::emconf;
use crate::paths::SkeletonPaths;

/// Where a skeleton stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupState {
    /// All files present, ready to run
    Pending,
    /// A previous run completed here
    Applied,
    /// Files a run needs are missing
    Incomplete { missing: Vec<PathBuf> },
}

pub fn inspect(paths: &SkeletonPaths, config: &KickstartConfig) -> Result<SetupState> {
    let missing: Vec<PathBuf> = [&paths.manifest, &paths.metadata, &paths.lock, &paths.installer]
        .into_iter()
        .filter(|p| !p.exists())
        .cloned()
        .collect();

    if paths.manifest.exists() && paths.metadata.exists() && !paths.installer.exists() {
        let manifest = read(&paths.manifest)?;
        let metadata = read(&paths.metadata)?;
        let placeholder = config.placeholder_namespace().json_escaped();
        if !manifest.contains(&placeholder) && !emconf::has_placeholders(&metadata) {
            tracing::debug!(root = %paths.root.display(), "no placeholders left");
            return Ok(SetupState::Applied);
        }
    }

    if missing.is_empty() {
        Ok(SetupState::Pending)
    } else {
        Ok(SetupState::Incomplete { missing })
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
