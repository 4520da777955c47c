//! Placeholder substitution in `ext_emconf.php`

/// Placeholder for the extension title
pub const TITLE_TOKEN: &str = "<TITLE>";

/// Placeholder for the extension description
pub const DESCRIPTION_TOKEN: &str = "<DESCRIPTION>";

/// Fill the title and description placeholders.
///
/// Both tokens sit inside single-quoted PHP strings, so the inserted text is
/// escaped for that context.
pub fn fill_placeholders(conf: &str, title: &str, description: &str) -> String {
    conf.replace(TITLE_TOKEN, &escape_single_quoted(title))
        .replace(DESCRIPTION_TOKEN, &escape_single_quoted(description))
}

/// Whether any placeholder is still waiting for a value.
pub fn has_placeholders(conf: &str) -> bool {
    conf.contains(TITLE_TOKEN) || conf.contains(DESCRIPTION_TOKEN)
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
