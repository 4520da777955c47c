//! The six questions, in order

use anyhow::{Context, Result};

use crate::identifiers::{
    ExtensionKey, License, PackageName, Title, ValidationError, VendorKey,
};
use crate::installer::{Answers, Presets};
use crate::prompt::{self, Prompter};

/// Collect every answer, deriving defaults from earlier ones.
pub fn collect(
    io: &mut dyn Prompter,
    dir_name: &str,
    presets: &Presets,
    default_license: License,
) -> Result<Answers> {
    let suggested_key = ExtensionKey::suggest_from_dir_name(dir_name);
    let extension_key = answer(
        io,
        presets.extension_key.as_deref(),
        "Extension key",
        Some(&suggested_key),
        ExtensionKey::parse,
    )?;

    let vendor = answer(io, presets.vendor.as_deref(), "Vendor key", None, VendorKey::parse)?;

    let suggested_name = PackageName::suggest(&vendor, &extension_key);
    let package_name = answer(
        io,
        presets.package_name.as_deref(),
        "Composer name",
        Some(&suggested_name),
        PackageName::parse,
    )?;
    let namespace = package_name.namespace();

    let suggested_title = extension_key.default_title();
    let title = answer(
        io,
        presets.title.as_deref(),
        "Title",
        Some(&suggested_title),
        Title::parse,
    )?;

    let license = match presets.license.as_deref() {
        Some(preset) => parse_preset("License", preset, License::from_choice)?,
        None => prompt::select_validated(
            io,
            "License",
            &License::labels(),
            default_license.index(),
            License::from_choice,
        )?,
    };

    let description = match presets.description.clone() {
        Some(preset) => preset,
        None => io.ask("Description", Some(""))?,
    };

    Ok(Answers {
        extension_key,
        vendor,
        package_name,
        namespace,
        title,
        license,
        description,
    })
}

fn answer<T, F>(
    io: &mut dyn Prompter,
    preset: Option<&str>,
    question: &str,
    default: Option<&str>,
    validate: F,
) -> Result<T>
where
    F: Fn(&str) -> Result<T, ValidationError>,
{
    match preset {
        Some(value) => parse_preset(question, value, validate),
        None => prompt::ask_validated(io, question, default, validate),
    }
}

/// Presets cannot be re-asked, so a rejection is fatal.
fn parse_preset<T, F>(question: &str, value: &str, validate: F) -> Result<T>
where
    F: Fn(&str) -> Result<T, ValidationError>,
{
    validate(value).with_context(|| format!("{question} '{value}' given as option"))
}
