//! Co-author list loading.
//!
//! Reads names from a simple CSV file with a header row. Values are not
//! quoted in this data source, so a plain comma split is sufficient.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the co-author file.
#[derive(Error, Debug)]
pub enum CoauthorsError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Loads co-author names from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Malformed rows are skipped,
/// never reported.
pub fn load_names(path: &Path) -> Result<Vec<String>, CoauthorsError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_names(&content))
}

/// Extracts names from CSV text.
///
/// The header row is lowercased and searched for a `name` column; each
/// subsequent row contributes that column's trimmed value. If no `name`
/// column exists, every line after the header is taken whole as a name.
/// Blank lines and blank names are dropped.
pub fn parse_names(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let header: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let name_index = match header.iter().position(|h| h == "name") {
        Some(i) => i,
        None => {
            // Fallback: treat each line after the header as a single name
            return lines[1..].iter().map(|l| l.to_string()).collect();
        }
    };

    lines[1..]
        .iter()
        .filter_map(|row| {
            let name = row.split(',').nth(name_index).unwrap_or("").trim();
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}
