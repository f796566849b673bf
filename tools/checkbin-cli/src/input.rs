//! Pack input loading
//!
//! Accepts either a plain-text list (one entry per line) or JSON. JSON input
//! is detected by its first non-whitespace character being `{` or `[`:
//!
//! ```text
//! ["a", "b"]                                   entries only
//! {"entries": ["a", "b"], "metadata": [1, 2]}  entries + metadata
//! {"paths": ["a", "b"]}                        `paths` is an alias
//! ```
//!
//! An extract document (`header`/`entries`/`metadata`) is valid pack input,
//! its `header` is ignored.
//!
//! Non-string JSON entries are stored as their compact JSON text, so `true`
//! and `null` pack as `"true"` and `"null"` (Python's `str()` would give
//! `"True"` and `"None"`).
//!
//! Plain-text lines break on `\n`, `\r` and the other Unicode line
//! separators (`\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`, `\u{2028}`,
//! `\u{2029}`), so CR-only files split the same as LF or CRLF ones.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::fs::{MAX_INPUT_BYTES, read_file_with_limit};

/// Keys holding the entry list in a JSON object, in priority order
const ENTRY_KEYS: [&str; 2] = ["entries", "paths"];

/// Characters that end a plain-text line
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Entries and optional metadata to be packed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackInput {
    pub entries: Vec<String>,
    pub metadata: Option<Vec<u32>>,
}

/// Load pack input from a UTF-8 text or JSON file.
pub fn load_input(path: &Path) -> Result<PackInput> {
    let bytes = read_file_with_limit(path, MAX_INPUT_BYTES)?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("Input is not valid UTF-8: {}", path.display()))?;
    parse_input(&text).with_context(|| format!("Failed to load entries: {}", path.display()))
}

/// Parse pack input text.
pub fn parse_input(text: &str) -> Result<PackInput> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        parse_json(text)
    } else {
        Ok(parse_lines(text))
    }
}

/// One entry per line, trimmed, blank lines skipped. No metadata.
fn parse_lines(text: &str) -> PackInput {
    let entries = text
        .split(LINE_BREAKS)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    PackInput {
        entries,
        metadata: None,
    }
}

fn parse_json(text: &str) -> Result<PackInput> {
    let payload: Value = serde_json::from_str(text).context("Invalid JSON input")?;

    let (list, metadata) = match payload {
        Value::Object(mut map) => {
            let metadata = map.remove("metadata");
            let found = ENTRY_KEYS.iter().find_map(|key| map.remove(*key));
            (found.unwrap_or(Value::Object(map)), metadata)
        }
        other => (other, None),
    };

    let Value::Array(items) = list else {
        anyhow::bail!("JSON input must be a list or object with entries");
    };
    let entries = items.into_iter().map(entry_text).collect();

    let metadata = match metadata {
        None | Some(Value::Null) => None,
        Some(Value::Array(values)) => Some(
            values
                .iter()
                .enumerate()
                .map(|(index, value)| metadata_value(index, value))
                .collect::<Result<Vec<_>>>()?,
        ),
        Some(_) => anyhow::bail!("Metadata must be a list of integers"),
    };

    Ok(PackInput { entries, metadata })
}

/// Strings are taken verbatim, any other JSON value as its compact text.
fn entry_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn metadata_value(index: usize, value: &Value) -> Result<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Metadata must be a list of integers: value {} at index {} is not a u32",
                value,
                index
            )
        })
}
