//! Turn the skeleton into a named extension

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use kickstart::installer::{self, Presets};
use kickstart::prompt::{NonInteractivePrompter, Prompter, TerminalPrompter};

/// Execute the init command
///
/// # Arguments
///
/// * `path` - Skeleton root
/// * `presets` - Answers given as options; those questions are skipped
/// * `no_interaction` - Resolve every remaining question to its default
pub fn execute(path: &Path, presets: Presets, no_interaction: bool) -> Result<()> {
    let mut io: Box<dyn Prompter> = if no_interaction {
        Box::new(NonInteractivePrompter::new())
    } else {
        Box::new(TerminalPrompter::stdio())
    };

    println!("🧩 Kickstarting extension in {}\n", path.display().to_string().cyan());
    let answers = installer::run(path, io.as_mut(), &presets)?;
    tracing::info!(
        title = %answers.title,
        license = %answers.license,
        "skeleton renamed"
    );
    Ok(())
}
