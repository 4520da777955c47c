//! Writing answers into the skeleton and removing single-use files

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::config::KickstartConfig;
use crate::emconf;
use crate::installer::Answers;
use crate::manifest::ManifestEditor;
use crate::paths::SkeletonPaths;

/// Apply the answers to `composer.json`.
pub fn write_manifest(path: &Path, config: &KickstartConfig, answers: &Answers) -> Result<()> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let updated = patch_manifest(&original, config, answers)
        .with_context(|| format!("Failed to update {}", path.display()))?;
    fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "manifest rewritten");
    Ok(())
}

pub fn patch_manifest(original: &str, config: &KickstartConfig, answers: &Answers) -> Result<String> {
    let mut editor = ManifestEditor::new(original)?;
    editor.set_sub_node(
        "extra",
        "installer-name",
        &json!(answers.extension_key.as_str()),
    )?;
    editor.set_main_key("name", &json!(answers.package_name.as_str()))?;
    editor.set_main_key("description", &json!(answers.description))?;
    editor.set_main_key("license", &json!(answers.license.label()))?;
    editor.set_main_key("type", &json!(config.package_type))?;
    if !editor.remove_main_key("scripts")? {
        tracing::debug!("manifest had no scripts section");
    }
    if !editor.remove_sub_node("require-dev", "composer/composer")? {
        tracing::debug!("manifest had no composer/composer dev requirement");
    }

    let replaced = editor.replace_namespace(&config.placeholder_namespace(), &answers.namespace);
    tracing::debug!(replaced, "namespace placeholders replaced");
    Ok(editor.into_contents())
}

/// Apply title and description to `ext_emconf.php`.
pub fn write_metadata(path: &Path, answers: &Answers) -> Result<()> {
    let conf = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let filled = emconf::fill_placeholders(&conf, answers.title.as_str(), &answers.description);
    fs::write(path, filled).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "metadata rewritten");
    Ok(())
}

/// Delete the lock file and the installer hook. Either failure is fatal.
pub fn cleanup(paths: &SkeletonPaths) -> Result<()> {
    for target in paths.cleanup_targets() {
        fs::remove_file(target)
            .with_context(|| format!("Failed to delete {}", target.display()))?;
        tracing::debug!(path = %target.display(), "deleted");
    }
    Ok(())
}
