//! End-to-end runs against a throwaway copy of the extension skeleton
//!
//! Run with: cargo test --test install_flow

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use kickstart::installer::{self, Presets, SetupState, SUCCESS_MESSAGE};
use kickstart::prompt::{NonInteractivePrompter, ScriptedPrompter};
use serde_json::{json, Value};
use tempfile::TempDir;

const COMPOSER_JSON: &str = r#"{
    "name": "grossberger-georg/kickstart-extension",
    "description": "Skeleton for a new TYPO3 extension",
    "type": "project",
    "license": "MIT",
    "require": {
        "typo3/cms-core": "^9.5"
    },
    "require-dev": {
        "composer/composer": "^1.8",
        "typo3/testing-framework": "^4.0"
    },
    "autoload": {
        "psr-4": {
            "GrossbergerGeorg\\KickstartExtension\\": "Classes/"
        }
    },
    "scripts": {
        "post-create-project-cmd": "GrossbergerGeorg\\KickstartExtension\\Installer::run"
    },
    "extra": {
        "typo3/cms": {
            "web-dir": "public"
        }
    }
}
"#;

const EXT_EMCONF: &str = r#"<?php
declare(strict_types=1);

$EM_CONF[$_EXTKEY] = [
    'title'            => '<TITLE>',
    'description'      => '<DESCRIPTION>',
    'version'          => '1.0.0',
    'state'            => 'stable',
    'category'         => 'misc',
    'clearCacheOnLoad' => 0,
    'constraints'      => [
        'depends'   => [],
        'conflicts' => [],
        'suggests'  => [],
    ],
];
"#;

/// Lay out a fresh skeleton in `{temp}/{dir_name}`.
fn skeleton(temp: &TempDir, dir_name: &str) -> Result<PathBuf> {
    let root = temp.path().join(dir_name);
    fs::create_dir_all(root.join("Classes"))?;
    fs::write(root.join("composer.json"), COMPOSER_JSON)?;
    fs::write(root.join("composer.lock"), "{}\n")?;
    fs::write(root.join("ext_emconf.php"), EXT_EMCONF)?;
    fs::write(root.join("Classes/Installer.php"), "<?php\n")?;
    Ok(root)
}

fn manifest(root: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(
        root.join("composer.json"),
    )?)?)
}

#[test]
fn test_interactive_run_rewrites_skeleton() -> Result<()> {
    let temp = TempDir::new()?;
    let root = skeleton(&temp, "CoolExtension")?;

    let mut io = ScriptedPrompter::new([
        "",                // suggested Cool_Extension is rejected
        "cool_extension",
        "My Vendor",       // rejected
        "my-vendor",
        "",                // my-vendor/cool-extension
        "",                // Cool Extension
        "9",               // out of range
        "1",               // Apache-2.0
        "Makes things cool",
    ]);
    let answers = installer::run(&root, &mut io, &Presets::default())?;

    assert_eq!(io.warnings().len(), 3);
    assert_eq!(io.lines(), [SUCCESS_MESSAGE]);
    assert_eq!(answers.namespace.as_str(), "MyVendor\\CoolExtension\\");

    let value = manifest(&root)?;
    assert_eq!(value["name"], "my-vendor/cool-extension");
    assert_eq!(value["description"], "Makes things cool");
    assert_eq!(value["license"], "Apache-2.0");
    assert_eq!(value["type"], "typo3-cms-extension");
    assert_eq!(value["extra"]["installer-name"], "cool_extension");
    assert_eq!(value["extra"]["typo3/cms"]["web-dir"], "public");
    assert!(value.get("scripts").is_none());
    assert_eq!(
        value["require-dev"],
        json!({ "typo3/testing-framework": "^4.0" })
    );
    assert_eq!(
        value["autoload"]["psr-4"]["MyVendor\\CoolExtension\\"],
        "Classes/"
    );

    let conf = fs::read_to_string(root.join("ext_emconf.php"))?;
    assert!(conf.contains("'title'            => 'Cool Extension',"));
    assert!(conf.contains("'description'      => 'Makes things cool',"));
    assert!(!conf.contains("<TITLE>"));

    assert!(!root.join("composer.lock").exists());
    assert!(!root.join("Classes/Installer.php").exists());
    assert!(root.join("Classes").is_dir());
    Ok(())
}

#[test]
fn test_untouched_manifest_layout_is_kept() -> Result<()> {
    let temp = TempDir::new()?;
    let root = skeleton(&temp, "layout")?;
    let presets = Presets {
        extension_key: Some("layout".into()),
        vendor: Some("acme".into()),
        description: Some("x".into()),
        ..Presets::default()
    };

    installer::run(&root, &mut NonInteractivePrompter::new(), &presets)?;

    let text = fs::read_to_string(root.join("composer.json"))?;
    assert!(text.starts_with("{\n    \"name\": \"acme/layout\",\n"));
    assert!(text.contains("    \"require\": {\n        \"typo3/cms-core\": \"^9.5\"\n    },\n"));
    assert!(text.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_second_run_is_refused() -> Result<()> {
    let temp = TempDir::new()?;
    let root = skeleton(&temp, "twice")?;
    let presets = Presets {
        extension_key: Some("twice".into()),
        vendor: Some("acme".into()),
        ..Presets::default()
    };

    installer::run(&root, &mut NonInteractivePrompter::new(), &presets)?;
    assert_eq!(installer::status(&root)?, SetupState::Applied);

    let before = fs::read_to_string(root.join("composer.json"))?;
    let err = installer::run(&root, &mut NonInteractivePrompter::new(), &presets).unwrap_err();
    assert!(err.to_string().contains("already been set up"));
    assert_eq!(fs::read_to_string(root.join("composer.json"))?, before);
    Ok(())
}

#[test]
fn test_missing_file_fails_before_any_question() -> Result<()> {
    let temp = TempDir::new()?;
    let root = skeleton(&temp, "broken")?;
    fs::remove_file(root.join("composer.lock"))?;

    let mut io = ScriptedPrompter::new(Vec::<String>::new());
    let err = installer::run(&root, &mut io, &Presets::default()).unwrap_err();

    assert!(err.to_string().contains("composer.lock"));
    assert!(io.questions().is_empty());
    assert!(fs::read_to_string(root.join("ext_emconf.php"))?.contains("<TITLE>"));
    Ok(())
}

#[test]
fn test_config_overrides_default_license() -> Result<()> {
    let temp = TempDir::new()?;
    let root = skeleton(&temp, "configured")?;
    fs::write(root.join(".kickstart.toml"), "default_license = \"proprietary\"\n")?;

    let presets = Presets {
        extension_key: Some("configured".into()),
        vendor: Some("acme".into()),
        ..Presets::default()
    };
    let answers = installer::run(&root, &mut NonInteractivePrompter::new(), &presets)?;

    assert_eq!(answers.license.label(), "proprietary");
    assert_eq!(manifest(&root)?["license"], "proprietary");
    assert!(root.join(".kickstart.toml").exists());
    Ok(())
}
