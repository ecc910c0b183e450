//! Loading of input documents.
use crate::error::VerityError;
use serde_json::Value as JsonValue;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Parses `text` as a single JSON document, or as JSON Lines when `lines` is set.
///
/// Blank lines are skipped in JSON Lines mode.
pub fn parse_documents(text: &str, lines: bool) -> Result<Vec<JsonValue>, VerityError> {
    if !lines {
        return Ok(vec![serde_json::from_str(text)?]);
    }
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| VerityError::JsonLine { line: i + 1, source })
        })
        .collect()
}

/// Reads documents from a file.
pub fn read_documents<P: AsRef<Path>>(path: P, lines: bool) -> Result<Vec<JsonValue>, VerityError> {
    let path_ref = path.as_ref();
    let text = fs::read_to_string(path_ref).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read data from '{}': {}", path_ref.display(), e),
        )
    })?;
    log::debug!("Read {} bytes from '{}'", text.len(), path_ref.display());
    parse_documents(&text, lines)
}

/// Reads documents from standard input.
pub fn read_stdin_documents(lines: bool) -> Result<Vec<JsonValue>, VerityError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    parse_documents(&text, lines)
}
