//! Boundary scanner for JSON text
//!
//! Locates object members without building a document tree, so callers can
//! splice edits into the original text. `//` and `/* */` comments are
//! skipped like whitespace.

use anyhow::{bail, Context, Result};

/// One `"key": value` pair, as byte offsets into the scanned text
#[derive(Debug, Clone)]
pub struct Member {
    pub key: String,
    /// Offset of the key's opening quote
    pub key_start: usize,
    pub value_start: usize,
    /// One past the last byte of the value
    pub value_end: usize,
}

/// A scanned `{ ... }`
#[derive(Debug, Clone)]
pub struct ObjectSpan {
    pub open: usize,
    pub close: usize,
    pub members: Vec<Member>,
}

impl ObjectSpan {
    pub fn find(&self, key: &str) -> Option<(usize, &Member)> {
        self.members.iter().enumerate().find(|(_, m)| m.key == key)
    }
}

/// Scan the top-level object of a JSON document.
pub fn scan_root(text: &str) -> Result<ObjectSpan> {
    let bytes = text.as_bytes();
    let start = skip_ws(bytes, 0)?;
    if bytes.get(start) != Some(&b'{') {
        bail!("Manifest does not start with a JSON object");
    }
    let root = scan_object(text, start)?;
    let rest = skip_ws(bytes, root.close + 1)?;
    if rest != bytes.len() {
        bail!("Unexpected content after the top-level object at byte {rest}");
    }
    Ok(root)
}

/// Scan the object whose `{` is at `open`.
pub fn scan_object(text: &str, open: usize) -> Result<ObjectSpan> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        bail!("Expected '{{' at byte {open}");
    }

    let mut members = Vec::new();
    let mut pos = skip_ws(bytes, open + 1)?;
    loop {
        match bytes.get(pos) {
            Some(b'}') => {
                return Ok(ObjectSpan {
                    open,
                    close: pos,
                    members,
                })
            }
            Some(b'"') => {}
            Some(other) => bail!("Expected a key at byte {pos}, found '{}'", *other as char),
            None => bail!("Unterminated object starting at byte {open}"),
        }

        let key_start = pos;
        let key_end = skip_string(bytes, pos)?;
        let key: String = serde_json::from_str(&text[key_start..key_end])
            .with_context(|| format!("Invalid key at byte {key_start}"))?;

        pos = skip_ws(bytes, key_end)?;
        if bytes.get(pos) != Some(&b':') {
            bail!("Expected ':' after key \"{key}\" at byte {pos}");
        }
        let value_start = skip_ws(bytes, pos + 1)?;
        let value_end = skip_value(bytes, value_start)?;
        members.push(Member {
            key,
            key_start,
            value_start,
            value_end,
        });

        pos = skip_ws(bytes, value_end)?;
        match bytes.get(pos) {
            Some(b',') => pos = skip_ws(bytes, pos + 1)?,
            Some(b'}') => {}
            _ => bail!("Expected ',' or '}}' at byte {pos}"),
        }
    }
}

/// Skip whitespace and comments, returning the next significant offset.
pub fn skip_ws(bytes: &[u8], mut pos: usize) -> Result<usize> {
    loop {
        match bytes.get(pos) {
            Some(b' ' | b'\t' | b'\n' | b'\r') => pos += 1,
            Some(b'/') if bytes.get(pos + 1) == Some(&b'/') => {
                while pos < bytes.len() && bytes[pos] != b'\n' {
                    pos += 1;
                }
            }
            Some(b'/') if bytes.get(pos + 1) == Some(&b'*') => {
                let body = pos + 2;
                let end = bytes[body..]
                    .windows(2)
                    .position(|w| w == b"*/")
                    .with_context(|| format!("Unterminated comment at byte {pos}"))?;
                pos = body + end + 2;
            }
            _ => return Ok(pos),
        }
    }
}

fn skip_string(bytes: &[u8], start: usize) -> Result<usize> {
    let mut pos = start + 1;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'\\' => pos += 2,
            b'"' => return Ok(pos + 1),
            _ => pos += 1,
        }
    }
    bail!("Unterminated string at byte {start}")
}

fn skip_value(bytes: &[u8], start: usize) -> Result<usize> {
    match bytes.get(start) {
        Some(b'"') => skip_string(bytes, start),
        Some(b'{') | Some(b'[') => skip_container(bytes, start),
        Some(_) => {
            let mut pos = start;
            while let Some(&b) = bytes.get(pos) {
                if matches!(b, b',' | b'}' | b']' | b' ' | b'\t' | b'\n' | b'\r' | b'/') {
                    break;
                }
                pos += 1;
            }
            if pos == start {
                bail!("Expected a value at byte {start}");
            }
            Ok(pos)
        }
        None => bail!("Expected a value at end of input"),
    }
}

/// Skip a balanced `{...}` or `[...]`, honouring strings and comments.
fn skip_container(bytes: &[u8], start: usize) -> Result<usize> {
    let mut depth = 0usize;
    let mut pos = start;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'"' => {
                pos = skip_string(bytes, pos)?;
                continue;
            }
            b'/' if matches!(bytes.get(pos + 1), Some(b'/') | Some(b'*')) => {
                pos = skip_ws(bytes, pos)?;
                continue;
            }
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(pos + 1);
                }
            }
            _ => {}
        }
        pos += 1;
    }
    bail!("Unterminated container at byte {start}")
}

/// Whitespace that starts the line containing `pos`.
pub fn line_indent(text: &str, pos: usize) -> &str {
    let line_start = text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &text[line_start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

/// Indentation of a member's key when it sits on its own line.
pub fn own_line_indent(text: &str, key_start: usize) -> Option<&str> {
    let line_start = text[..key_start].rfind('\n').map(|i| i + 1)?;
    let prefix = &text[line_start..key_start];
    prefix
        .bytes()
        .all(|b| b == b' ' || b == b'\t')
        .then_some(prefix)
}
