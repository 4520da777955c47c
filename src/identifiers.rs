//! Identifier rules for the extension being kickstarted
//!
//! Every answer the installer collects is validated here. Each validated
//! value is a newtype that can only be built through its `parse`, so the
//! rewrite steps never see an unchecked string.
//!
//! Validation returns `Result<_, ValidationError>`; the prompt loop decides
//! whether a failure means "ask again" or "abort".

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Rejected user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid extension key")]
    ExtensionKey,

    #[error("Invalid vendor key")]
    VendorKey,

    #[error("Invalid composer name")]
    PackageName,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid license '{0}', choose one of: {list}", list = License::labels().join(", "))]
    License(String),
}

fn extension_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]+[a-z0-9]$").expect("Invalid extension key regex"))
}

fn vendor_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]+[a-z0-9]$").expect("Invalid vendor key regex"))
}

fn package_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9-]+[a-z0-9]/[a-z][a-z0-9-]+[a-z0-9]$")
            .expect("Invalid package name regex")
    })
}

/// Lower/digit followed by upper: the camelCase word boundary.
fn camel_boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid camel boundary regex"))
}

// =============================================================================
// Extension key
// =============================================================================

/// Lowercase snake-case extension key, e.g. `news_importer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionKey(String);

impl ExtensionKey {
    /// Validate an extension key. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = input.trim();
        if extension_key_regex().is_match(value) && !value.contains("__") {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::ExtensionKey)
        }
    }

    /// Suggest an extension key from a directory name.
    ///
    /// `lower1Upper2` becomes `lower1_Upper2` and spaces become underscores.
    /// Case is left alone, so the suggestion may itself be invalid.
    pub fn suggest_from_dir_name(dir_name: &str) -> String {
        camel_boundary_regex()
            .replace_all(dir_name, "${1}_${2}")
            .replace(' ', "_")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title-cased words: `my_cool_ext` -> `My Cool Ext`
    pub fn default_title(&self) -> String {
        capitalize_words(&self.0.replace('_', " "))
    }
}

impl fmt::Display for ExtensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Vendor key
// =============================================================================

/// Lowercase kebab-case vendor key, e.g. `acme-corp`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorKey(String);

impl VendorKey {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if vendor_key_regex().is_match(input) && !input.contains("--") {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError::VendorKey)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Package name
// =============================================================================

/// Composer package name, `vendor/extension-key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if package_name_regex().is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError::PackageName)
        }
    }

    /// `acme` + `my_ext` -> `acme/my-ext`
    pub fn suggest(vendor: &VendorKey, extension_key: &ExtensionKey) -> String {
        format!("{}/{}", vendor, extension_key.as_str().replace('_', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PHP namespace for the package: `my-vendor/cool-ext` -> `MyVendor\CoolExt\`
    pub fn namespace(&self) -> Namespace {
        let segments: Vec<String> = self
            .0
            .split('/')
            .map(|segment| capitalize_words(&segment.replace('-', " ")).replace(' ', ""))
            .collect();
        Namespace(format!("{}\\", segments.join("\\")))
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Namespace
// =============================================================================

/// PHP namespace prefix with a trailing separator, e.g. `Acme\MyExt\`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace(String);

impl Namespace {
    /// Wrap a namespace prefix that is known to be well-formed, such as the
    /// skeleton's placeholder.
    pub fn from_prefix(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace as it appears inside a JSON string literal.
    pub fn json_escaped(&self) -> String {
        self.0.replace('\\', "\\\\")
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Title
// =============================================================================

/// Display title. Stored as typed; only checked for non-blank content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            Err(ValidationError::EmptyTitle)
        } else {
            Ok(Self(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// License
// =============================================================================

/// Licenses offered for the new extension, in menu order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum License {
    Mit,
    Apache2,
    Gpl3Only,
    #[default]
    Gpl3OrLater,
    Proprietary,
}

impl License {
    pub const ALL: [License; 5] = [
        License::Mit,
        License::Apache2,
        License::Gpl3Only,
        License::Gpl3OrLater,
        License::Proprietary,
    ];

    /// SPDX identifier (or `proprietary`) written to the manifest
    pub fn label(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3Only => "GPL-3.0-only",
            License::Gpl3OrLater => "GPL-3.0-or-later",
            License::Proprietary => "proprietary",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.label()).collect()
    }

    /// Position in [`License::ALL`]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|l| *l == self)
            .unwrap_or_default()
    }

    /// Resolve a menu answer: either the exact label or a numeric index.
    pub fn from_choice(input: &str) -> Result<Self, ValidationError> {
        let choice = input.trim();
        if let Some(license) = Self::ALL.iter().find(|l| l.label() == choice) {
            return Ok(*license);
        }
        choice
            .parse::<usize>()
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| ValidationError::License(choice.to_string()))
    }
}

impl FromStr for License {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_choice(s)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper-case the first character of every space-separated word.
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_key_rules() {
        for valid in ["my_ext", "abc", "news2", "a_b_c", "ext_9"] {
            assert!(ExtensionKey::parse(valid).is_ok(), "{valid} should pass");
        }
        for invalid in ["", "ab", "My_ext", "my__ext", "_ext", "ext_", "9ext", "my-ext"] {
            assert_eq!(
                ExtensionKey::parse(invalid),
                Err(ValidationError::ExtensionKey),
                "{invalid} should fail"
            );
        }
    }

    #[test]
    fn test_extension_key_is_trimmed() {
        let key = ExtensionKey::parse("  my_ext \n").unwrap();
        assert_eq!(key.as_str(), "my_ext");
    }

    #[test]
    fn test_vendor_key_rules() {
        for valid in ["acme", "acme-corp", "9to5", "a1b"] {
            assert!(VendorKey::parse(valid).is_ok(), "{valid} should pass");
        }
        for invalid in ["", "ac", "acme--corp", "-acme", "acme-", "Acme", "acme_corp", " acme"] {
            assert!(VendorKey::parse(invalid).is_err(), "{invalid} should fail");
        }
    }

    #[test]
    fn test_package_name_rules() {
        for valid in ["acme/my-ext", "9to5/ext", "my-vendor/cool-extension"] {
            assert!(PackageName::parse(valid).is_ok(), "{valid} should pass");
        }
        for invalid in ["acme", "acme/9ext", "acme/my_ext", "Acme/ext", "acme/ext/x", "acme/ext-"] {
            assert!(PackageName::parse(invalid).is_err(), "{invalid} should fail");
        }
    }

    #[test]
    fn test_title_rules() {
        assert_eq!(Title::parse("   "), Err(ValidationError::EmptyTitle));
        assert_eq!(Title::parse(""), Err(ValidationError::EmptyTitle));
        assert_eq!(Title::parse(" Cool Ext ").unwrap().as_str(), " Cool Ext ");
    }

    #[test]
    fn test_suggest_extension_key_from_dir_name() {
        assert_eq!(
            ExtensionKey::suggest_from_dir_name("KickstartExtension"),
            "Kickstart_Extension"
        );
        assert_eq!(ExtensionKey::suggest_from_dir_name("my ext"), "my_ext");
        assert_eq!(ExtensionKey::suggest_from_dir_name("news2Feed"), "news2_Feed");
        assert_eq!(ExtensionKey::suggest_from_dir_name("plain"), "plain");
    }

    #[test]
    fn test_suggest_package_name() {
        let vendor = VendorKey::parse("acme").unwrap();
        let key = ExtensionKey::parse("my_ext").unwrap();
        assert_eq!(PackageName::suggest(&vendor, &key), "acme/my-ext");
    }

    #[test]
    fn test_namespace_derivation() {
        let name = PackageName::parse("my-vendor/cool-extension").unwrap();
        let namespace = name.namespace();
        assert_eq!(namespace.as_str(), "MyVendor\\CoolExtension\\");
        assert_eq!(namespace.json_escaped(), "MyVendor\\\\CoolExtension\\\\");
    }

    #[test]
    fn test_default_title() {
        let key = ExtensionKey::parse("my_cool_ext").unwrap();
        assert_eq!(key.default_title(), "My Cool Ext");
    }

    #[test]
    fn test_license_choice_by_label_or_index() {
        assert_eq!(License::from_choice("MIT"), Ok(License::Mit));
        assert_eq!(License::from_choice("3"), Ok(License::Gpl3OrLater));
        assert_eq!(License::from_choice("4"), Ok(License::Proprietary));
        assert!(License::from_choice("5").is_err());
        assert!(License::from_choice("BSD").is_err());
        assert_eq!(License::default().label(), "GPL-3.0-or-later");
        assert_eq!(License::Gpl3OrLater.index(), 3);
    }
}
