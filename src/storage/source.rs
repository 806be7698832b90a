//! Reading Journal.TXT source files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::DEFAULT_NAME;

const BOM: char = '\u{feff}';

/// Reads a journal file as UTF-8, dropping a leading byte-order mark
pub fn read_journal(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal: {}", path.display()))?;

    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Derives a journal name from its file name (`vienna.txt` -> `vienna`)
pub fn journal_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}
