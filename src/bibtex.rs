//! BibTeX bibliography parser.
//!
//! Parses entries in the format `@type{key, field = {value}, ...}` from raw
//! bibliography text. Field values may be brace-delimited (`{...}`) or
//! quote-delimited (`"..."`).
//!
//! Parsing is best-effort: the source data is human-authored, so blocks or
//! fields that do not match the expected shape are silently skipped rather
//! than reported as errors. An empty result is a valid outcome.

use std::collections::HashMap;

use regex::Regex;

/// A single bibliography entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BibEntry {
    /// The entry kind (e.g., "article", "inproceedings"), lowercased.
    ///
    /// Free-form: the source data is user-authored, so this is not a
    /// closed set.
    pub entry_type: String,
    /// The citation key (e.g., "doe2020"). Uniqueness is by convention only;
    /// duplicate keys pass through unchecked.
    pub citation_key: String,
    /// Field name (lowercased) to trimmed value. If a field repeats within
    /// one entry, the last occurrence wins.
    pub fields: HashMap<String, String>,
}

/// Parses bibliography text into an ordered sequence of entries.
///
/// Blocks are found by splitting on an `@` optionally preceded by a newline.
/// This split does not track brace nesting, so an `@` inside a field value
/// mis-splits that record (see the module tests). A block is kept only if
/// both an entry type and a citation key are recognized; otherwise it is
/// dropped whole. Within a kept block, each `name = {value}` or
/// `name = "value"` pair becomes a field; pairs that match neither shape are
/// invisible. Brace content is preferred over quote content when both
/// capture.
///
/// Never fails: malformed input degrades to fewer (or zero) entries.
///
/// # Examples
///
/// ```
/// use site_cards::parse_bibtex;
///
/// let entries = parse_bibtex("@article{doe2020, title={A Study}, year={2020}}");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].entry_type, "article");
/// assert_eq!(entries[0].citation_key, "doe2020");
/// assert_eq!(entries[0].fields["title"], "A Study");
/// ```
pub fn parse_bibtex(text: &str) -> Vec<BibEntry> {
    let block_re = Regex::new(r"\n?@").unwrap();
    let type_re = Regex::new(r"^@(\w+)\s*\{").unwrap();
    let key_re = Regex::new(r"^@\w+\s*\{\s*([^,]+)\s*,").unwrap();
    // Group 3: brace-delimited content, group 4: quote-delimited content.
    let field_re = Regex::new(r#"(\w+)\s*=\s*(\{([^}]*)\}|"([^"]*)")\s*,?"#).unwrap();

    let mut entries = Vec::new();

    for block in block_re.split(text) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        // Re-attach the marker consumed by the split.
        let raw = format!("@{}", block);

        let entry_type = match type_re.captures(&raw) {
            Some(cap) => cap[1].to_lowercase(),
            None => continue,
        };
        let citation_key = match key_re.captures(&raw) {
            Some(cap) => cap[1].trim().to_string(),
            None => continue,
        };

        let mut fields = HashMap::new();
        for cap in field_re.captures_iter(&raw) {
            let name = cap[1].to_lowercase();
            let value = cap
                .get(3)
                .or_else(|| cap.get(4))
                .map(|m| m.as_str())
                .unwrap_or("")
                .trim()
                .to_string();
            fields.insert(name, value);
        }

        entries.push(BibEntry {
            entry_type,
            citation_key,
            fields,
        });
    }

    entries
}
