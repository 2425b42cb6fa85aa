//! JSON output for extraction results.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a result to a JSON string.
pub fn to_json<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Output(format!("JSON serialization error: {}", e)))
}

/// Serialize a result and write it to a file.
///
/// Failure here is propagated rather than swallowed: the computed result
/// would otherwise be silently lost.
pub fn write_json<T: Serialize, P: AsRef<Path>>(
    path: P,
    value: &T,
    format: JsonFormat,
) -> Result<()> {
    let json = to_json(value, format)?;
    fs::write(path.as_ref(), json).map_err(|e| {
        Error::Output(format!("cannot write {}: {}", path.as_ref().display(), e))
    })
}
