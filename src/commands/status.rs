//! Report whether a skeleton still needs kickstarting

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::Path;

use kickstart::installer::{self, SetupState};

pub fn execute(path: &Path, json: bool) -> Result<()> {
    let state = installer::status(path)?;
    if json {
        output_json(&state)
    } else {
        output_human(path, &state);
        Ok(())
    }
}

fn output_json(state: &SetupState) -> Result<()> {
    let value = match state {
        SetupState::Pending => json!({ "state": "pending" }),
        SetupState::Applied => json!({ "state": "applied" }),
        SetupState::Incomplete { missing } => json!({
            "state": "incomplete",
            "missing": missing.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn output_human(path: &Path, state: &SetupState) {
    match state {
        SetupState::Pending => {
            println!("{} {} is ready: run 'kickstart init'", "○".yellow(), path.display());
        }
        SetupState::Applied => {
            println!("{} {} has already been set up", "✓".green(), path.display());
        }
        SetupState::Incomplete { missing } => {
            println!("{} {} is not a complete skeleton", "✗".red(), path.display());
            for file in missing {
                println!("   missing: {}", file.display());
            }
        }
    }
}
