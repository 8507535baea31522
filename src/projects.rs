//! Projects and grants data model.
//!
//! Loads project/grant records from JSON arrays and computes the summary
//! statistics shown above the card list: counts, principal-investigator
//! counts, and total funding.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading project or grant records.
#[derive(Error, Debug)]
pub enum ProjectsError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Records must be a JSON array")]
    NotAnArray,
}

/// One project or grant record. All fields are optional; the source data is
/// hand-maintained JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub name: Option<String>,
    pub role: Option<String>,
    /// Human-readable amount, possibly with a magnitude suffix ("$1.2M").
    pub funding: Option<String>,
    pub duration: Option<String>,
    pub collaborators: Option<String>,
    pub pi: Option<String>,
    #[serde(rename = "co-pi")]
    pub co_pi: Option<String>,
    pub keywords: Option<String>,
    pub website: Option<String>,
}

/// Summary statistics for one section (projects or grants).
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStats {
    pub total: usize,
    /// Records whose role is "pi" (case-insensitive).
    pub pi_count: usize,
    /// Sum of the parsed funding amounts, in dollars.
    pub funding_total: f64,
}

/// Loads records from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON is invalid, or the
/// top-level value is not an array.
pub fn load_records(path: &Path) -> Result<Vec<ProjectRecord>, ProjectsError> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Parses a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<ProjectRecord>, ProjectsError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ProjectsError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Parses a funding amount with an optional magnitude suffix.
///
/// Case-insensitive: `"$1.5M"` is 1,500,000 and `"200k"` is 200,000. The
/// magnitude letter may appear anywhere in the token; B outranks M outranks
/// K if several are present. Unparseable input yields 0, never an error.
pub fn parse_funding_amount(value: &str) -> f64 {
    let txt = value.trim().to_uppercase();
    if txt.is_empty() {
        return 0.0;
    }
    let has_b = txt.contains('B');
    let has_m = txt.contains('M');
    let has_k = txt.contains('K');

    let digits: String = txt
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let base = leading_number(&digits);

    if has_b {
        base * 1e9
    } else if has_m {
        base * 1e6
    } else if has_k {
        base * 1e3
    } else {
        base
    }
}

/// Parses the longest numeric prefix (digits, one decimal point) of `s`.
fn leading_number(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            end = i + 1;
        } else {
            break;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Formats a dollar amount with a compact magnitude suffix.
///
/// Amounts at or above a magnitude boundary show one decimal below 10 units
/// and none at or above: `$1.5M`, `$12M`, `$2.0B`. Below a thousand, the
/// rounded integer is shown as-is.
pub fn format_usd(amount: f64) -> String {
    let n = amount.round();
    if n >= 1e9 {
        scaled(n / 1e9, "B")
    } else if n >= 1e6 {
        scaled(n / 1e6, "M")
    } else if n >= 1e3 {
        scaled(n / 1e3, "K")
    } else {
        format!("${}", n as i64)
    }
}

fn scaled(v: f64, suffix: &str) -> String {
    if v >= 10.0 {
        format!("${:.0}{}", v, suffix)
    } else {
        format!("${:.1}{}", v, suffix)
    }
}

/// Computes the summary statistics for one list of records.
pub fn section_stats(records: &[ProjectRecord]) -> SectionStats {
    let pi_count = records
        .iter()
        .filter(|r| matches!(r.role.as_deref(), Some(role) if role.eq_ignore_ascii_case("pi")))
        .count();
    let funding_total = records
        .iter()
        .map(|r| parse_funding_amount(r.funding.as_deref().unwrap_or("")))
        .sum();
    SectionStats {
        total: records.len(),
        pi_count,
        funding_total,
    }
}

/// Maps a role string to its badge CSS class.
pub fn role_badge_class(role: &str) -> &'static str {
    if role.is_empty() {
        return "";
    }
    match role.to_lowercase().as_str() {
        "pi" => "badge-pi",
        "co-pi" | "copi" | "co pi" => "badge-copi",
        _ => "badge-member",
    }
}
