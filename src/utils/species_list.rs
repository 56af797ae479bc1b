//! Species list file reading utilities.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a species list from file.
///
/// # File Format
/// - One scientific name per line (e.g., `Capreolus capreolus`)
/// - Blank lines and lines starting with `#` are ignored
/// - Duplicates are dropped, keeping the first occurrence
///
/// # Errors
/// - Returns error if file cannot be read
/// - Returns error if file contains invalid UTF-8
pub fn read_species_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::InputOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let reader = BufReader::new(file);
    let mut species: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::InputOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if !species.iter().any(|s| s == trimmed) {
            species.push(trimmed.to_string());
        }
    }

    Ok(species)
}
