//! site-cards: render academic website sections as HTML cards.
//!
//! This library provides functionality to:
//! - Parse BibTeX bibliography text into structured entries
//! - Format authors, venues, and DOI links for display
//! - Load co-author names (CSV) and project/grant records (JSON)
//! - Generate the HTML card fragments injected into each page section

pub mod bibtex;
pub mod coauthors;
pub mod format;
pub mod projects;
pub mod render;

pub use bibtex::{parse_bibtex, BibEntry};
pub use coauthors::{load_names, parse_names};
pub use format::{doi_to_url, format_authors, venue};
pub use projects::{
    format_usd, load_records, parse_funding_amount, parse_records, role_badge_class,
    section_stats, ProjectRecord, SectionStats,
};
pub use render::{coauthor_cards, make_link, project_cards, publication_cards, stats_grid};
