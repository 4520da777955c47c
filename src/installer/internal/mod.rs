//! Internal implementation for the installer

pub mod guard;
pub mod questions;
pub mod rewrite;

use anyhow::{Context, Result};
use std::path::Path;

/// Name of the skeleton directory, used to suggest the extension key.
pub fn skeleton_dir_name(root: &Path) -> Result<String> {
    let absolute = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", root.display()))?;
    Ok(absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default())
}
