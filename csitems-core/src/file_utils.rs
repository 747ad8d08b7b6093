//! File utility functions.

use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::path::Path;

/// Read file with UTF-8 encoding, dropping a leading byte order mark.
pub fn read_utf8_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| with_path(e, path))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Read file with UTF-16LE encoding (legacy localization files).
pub fn read_utf16le_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| with_path(e, path))?;
    let (text, _, had_errors) = encoding_rs::UTF_16LE.decode(&bytes);
    if had_errors {
        return Err(CatalogError::Parse {
            line: 0,
            message: format!("Failed to decode UTF-16LE text in {}", path.display()),
        });
    }
    Ok(text.into_owned())
}

/// Serialize a value as pretty JSON and write it, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| with_path(e, path))?;
    Ok(())
}

fn with_path(e: std::io::Error, path: &Path) -> CatalogError {
    CatalogError::Io(std::io::Error::new(
        e.kind(),
        format!("{}: {}", path.display(), e),
    ))
}
