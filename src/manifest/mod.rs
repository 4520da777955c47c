//! Format-preserving edits to `composer.json`
//!
//! The manifest is never re-serialised. Each edit locates member boundaries
//! in the current text and splices in the change, so key order, indentation,
//! comments and every untouched byte survive. New members copy the
//! indentation of their siblings.
//!
//! # Example
//!
//! ```
//! use kickstart::manifest::ManifestEditor;
//! use serde_json::json;
//!
//! let mut editor = ManifestEditor::new("{\n    \"name\": \"a/b\",\n    \"scripts\": {}\n}\n")?;
//! editor.set_main_key("name", &json!("acme/my-ext"))?;
//! editor.remove_main_key("scripts")?;
//! assert_eq!(editor.contents(), "{\n    \"name\": \"acme/my-ext\"\n}\n");
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::identifiers::Namespace;

use self::internal::{line_indent, own_line_indent, scan_object, scan_root, ObjectSpan};

const DEFAULT_INDENT: &str = "    ";

/// Structural editor over the raw manifest text
#[derive(Debug, Clone)]
pub struct ManifestEditor {
    contents: String,
    indent_unit: String,
}

impl ManifestEditor {
    /// Wrap manifest text. Fails if the text is not a JSON object.
    pub fn new(contents: impl Into<String>) -> Result<Self> {
        let contents = contents.into();
        let root = scan_root(&contents)?;
        let indent_unit = root
            .members
            .first()
            .and_then(|m| own_line_indent(&contents, m.key_start))
            .filter(|indent| !indent.is_empty())
            .unwrap_or(DEFAULT_INDENT)
            .to_string();
        Ok(Self {
            contents,
            indent_unit,
        })
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn into_contents(self) -> String {
        self.contents
    }

    /// Set a top-level key, replacing its value or appending it.
    pub fn set_main_key(&mut self, key: &str, value: &Value) -> Result<()> {
        let root = scan_root(&self.contents)?;
        self.set_in_object(&root, key, value)
    }

    /// Set `main.sub`, creating `main` as an object when it is missing or
    /// not an object.
    pub fn set_sub_node(&mut self, main: &str, sub: &str, value: &Value) -> Result<()> {
        match self.object_member(main)? {
            Some(object) => self.set_in_object(&object, sub, value),
            None => {
                let mut node = serde_json::Map::new();
                node.insert(sub.to_string(), value.clone());
                self.set_main_key(main, &Value::Object(node))
            }
        }
    }

    /// Remove a top-level key. Returns whether it was present.
    pub fn remove_main_key(&mut self, key: &str) -> Result<bool> {
        let root = scan_root(&self.contents)?;
        Ok(self.remove_from_object(&root, key))
    }

    /// Remove `main.sub`. Returns whether it was present.
    pub fn remove_sub_node(&mut self, main: &str, sub: &str) -> Result<bool> {
        match self.object_member(main)? {
            Some(object) => Ok(self.remove_from_object(&object, sub)),
            None => Ok(false),
        }
    }

    /// Replace every JSON-escaped occurrence of `placeholder` with `namespace`.
    pub fn replace_namespace(&mut self, placeholder: &Namespace, namespace: &Namespace) -> usize {
        let from = placeholder.json_escaped();
        let count = self.contents.matches(&from).count();
        if count > 0 {
            self.contents = self.contents.replace(&from, &namespace.json_escaped());
        }
        count
    }

    /// The value of a top-level key, if that value is an object.
    fn object_member(&self, main: &str) -> Result<Option<ObjectSpan>> {
        let root = scan_root(&self.contents)?;
        match root.find(main) {
            Some((_, member)) if self.contents.as_bytes()[member.value_start] == b'{' => {
                Ok(Some(scan_object(&self.contents, member.value_start)?))
            }
            _ => Ok(None),
        }
    }

    fn set_in_object(&mut self, object: &ObjectSpan, key: &str, value: &Value) -> Result<()> {
        if let Some((_, member)) = object.find(key) {
            let indent = line_indent(&self.contents, member.key_start).to_string();
            let encoded = self.encode(value, &indent)?;
            self.contents
                .replace_range(member.value_start..member.value_end, &encoded);
            return Ok(());
        }

        let key_json = serde_json::to_string(key)?;
        match object.members.last() {
            Some(last) => {
                let first = &object.members[0];
                let insertion = match own_line_indent(&self.contents, first.key_start) {
                    Some(indent) => {
                        let indent = indent.to_string();
                        let encoded = self.encode(value, &indent)?;
                        format!(",\n{indent}{key_json}: {encoded}")
                    }
                    None => format!(", {key_json}: {}", serde_json::to_string(value)?),
                };
                self.contents.insert_str(last.value_end, &insertion);
            }
            None => {
                let outer = line_indent(&self.contents, object.open).to_string();
                let inner = format!("{outer}{}", self.indent_unit);
                let encoded = self.encode(value, &inner)?;
                self.contents.replace_range(
                    object.open + 1..object.close,
                    &format!("\n{inner}{key_json}: {encoded}\n{outer}"),
                );
            }
        }
        Ok(())
    }

    fn remove_from_object(&mut self, object: &ObjectSpan, key: &str) -> bool {
        let Some((index, member)) = object.find(key) else {
            return false;
        };

        let range = if let Some(next) = object.members.get(index + 1) {
            member.key_start..next.key_start
        } else if index > 0 {
            object.members[index - 1].value_end..member.value_end
        } else {
            object.open + 1..object.close
        };
        self.contents.replace_range(range, "");
        true
    }

    /// Encode a value for a member whose key line starts with `indent`.
    fn encode(&self, value: &Value, indent: &str) -> Result<String> {
        if !matches!(value, Value::Object(_) | Value::Array(_)) {
            return Ok(serde_json::to_string(value)?);
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent_unit.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        let pretty = String::from_utf8(buf)?;
        Ok(pretty.replace('\n', &format!("\n{indent}")))
    }
}
