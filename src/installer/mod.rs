//! Kickstart a renamed extension from the skeleton
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): the run, its inputs and its result
//! - Internal implementation: questions, rewrites and the setup guard
//!
//! # Example
//!
//! ```no_run
//! use kickstart::installer::{self, Presets};
//! use kickstart::prompt::TerminalPrompter;
//! use std::path::Path;
//!
//! let mut io = TerminalPrompter::stdio();
//! let answers = installer::run(Path::new("."), &mut io, &Presets::default())?;
//! println!("Namespace: {}", answers.namespace);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::config::KickstartConfig;
use crate::identifiers::{ExtensionKey, License, Namespace, PackageName, Title, VendorKey};
use crate::prompt::Prompter;

pub use internal::guard::SetupState;

/// Final line written after a successful run
pub const SUCCESS_MESSAGE: &str = "Extension skeleton created";

/// Answers supplied up front (command-line options). A preset replaces its
/// question and must pass the same validation.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub extension_key: Option<String>,
    pub vendor: Option<String>,
    pub package_name: Option<String>,
    pub title: Option<String>,
    pub license: Option<String>,
    pub description: Option<String>,
}

/// Everything a run collected and derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub extension_key: ExtensionKey,
    pub vendor: VendorKey,
    pub package_name: PackageName,
    pub namespace: Namespace,
    pub title: Title,
    pub license: License,
    pub description: String,
}

/// Inspect a skeleton without changing it.
pub fn status(root: &Path) -> Result<SetupState> {
    let config = KickstartConfig::load(root)?;
    internal::guard::inspect(&config.paths(root), &config)
}

/// Run the whole setup: ask, rewrite both files, remove the single-use files.
///
/// # Process
///
/// 1. **Guard**: refuse an already applied skeleton or one with files missing
/// 2. **Questions**: extension key, vendor key, package name, title,
///    license, description (each re-asked until valid)
/// 3. **Manifest**: structural edits plus namespace substitution
/// 4. **Metadata**: title and description placeholders
/// 5. **Cleanup**: delete the lock file and the installer hook
///
/// # Errors
///
/// Validation failures never surface here in interactive mode. Any file
/// error aborts the run; files rewritten before the failure stay rewritten.
pub fn run(root: &Path, io: &mut dyn Prompter, presets: &Presets) -> Result<Answers> {
    let config = KickstartConfig::load(root)?;
    let paths = config.paths(root);

    match internal::guard::inspect(&paths, &config)? {
        SetupState::Pending => {}
        SetupState::Applied => bail!(
            "Extension skeleton in {} has already been set up",
            root.display()
        ),
        SetupState::Incomplete { missing } => bail!(
            "Not an extension skeleton, missing: {}",
            display_list(&missing)
        ),
    }

    let dir_name = internal::skeleton_dir_name(root)?;
    let answers = internal::questions::collect(io, &dir_name, presets, config.license()?)?;
    tracing::info!(
        extension_key = %answers.extension_key,
        package = %answers.package_name,
        namespace = %answers.namespace,
        "answers collected"
    );

    internal::rewrite::write_manifest(&paths.manifest, &config, &answers)?;
    internal::rewrite::write_metadata(&paths.metadata, &answers)?;
    internal::rewrite::cleanup(&paths)?;

    io.write(SUCCESS_MESSAGE)?;
    Ok(answers)
}

fn display_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
