//! Presentation helpers for bibliography entries.
//!
//! Turns raw field values into display strings: author lists, venue
//! resolution, and DOI link rewriting.

use std::collections::HashMap;

use regex::Regex;

/// Formats an author field for display.
///
/// The field holds names joined by the BibTeX conjunction `and`
/// (case-insensitive, surrounded by whitespace). Three or fewer names are
/// joined by commas; more than three render as the first two followed by
/// "et al.". A missing or empty field renders as "Unknown".
///
/// # Examples
///
/// ```
/// use site_cards::format_authors;
///
/// assert_eq!(format_authors(Some("Jane Doe and John Smith")), "Jane Doe, John Smith");
/// assert_eq!(format_authors(None), "Unknown");
/// ```
pub fn format_authors(author: Option<&str>) -> String {
    let author = match author {
        Some(a) if !a.is_empty() => a,
        _ => return "Unknown".to_string(),
    };

    let and_re = Regex::new(r"(?i)\s+and\s+").unwrap();
    let parts: Vec<&str> = and_re.split(author).map(str::trim).collect();

    if parts.len() <= 3 {
        parts.join(", ")
    } else {
        format!("{}, {}, et al.", parts[0], parts[1])
    }
}

/// Resolves the publication venue for an entry.
///
/// First non-empty of the journal field, the booktitle (proceedings) field,
/// then the publisher field; empty string if none is present.
pub fn venue(fields: &HashMap<String, String>) -> &str {
    for key in ["journal", "booktitle", "publisher"] {
        if let Some(value) = fields.get(key) {
            if !value.is_empty() {
                return value;
            }
        }
    }
    ""
}

/// Rewrites a bare DOI into a resolver URL.
///
/// Values starting with the DOI directory prefix `10.` become
/// `https://doi.org/<doi>`; anything else is assumed to already be a full
/// URL and passes through unchanged.
pub fn doi_to_url(doi: &str) -> String {
    if doi.is_empty() {
        return String::new();
    }
    if doi.starts_with("10.") {
        format!("https://doi.org/{}", doi)
    } else {
        doi.to_string()
    }
}
