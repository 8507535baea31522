//! HTML card generation.
//!
//! Assembles the markup fragments injected into each page section. Every
//! card follows the site's `card` / `card-title` / `card-meta` /
//! `card-actions` structure. Text content is escaped; the data files are
//! semi-trusted.

use crate::bibtex::BibEntry;
use crate::format::{doi_to_url, format_authors, venue};
use crate::projects::{format_usd, role_badge_class, section_stats, ProjectRecord};

/// Escapes text for safe interpolation into HTML content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds an action-button link, or an empty string when there is no target.
pub fn make_link(href: &str, label: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"action-btn\">{}</a>",
        escape_html(href),
        label
    )
}

/// Renders publication entries as cards.
///
/// Each card shows the title (falling back to the citation key), an
/// author/year/venue meta line, and action links for the pdf, doi, and url
/// fields when present. An empty entry list renders a placeholder paragraph.
pub fn publication_cards(entries: &[BibEntry]) -> String {
    let cards: Vec<String> = entries
        .iter()
        .map(|e| {
            let f = &e.fields;
            let title = match f.get("title") {
                Some(t) if !t.is_empty() => t.as_str(),
                _ => e.citation_key.as_str(),
            };
            let authors = format_authors(f.get("author").map(String::as_str));
            let year = f.get("year").map(String::as_str).unwrap_or("");
            let v = venue(f);

            let mut meta_parts = Vec::new();
            if !authors.is_empty() {
                meta_parts.push(format!("Authors: {}", escape_html(&authors)));
            }
            if !year.is_empty() {
                meta_parts.push(escape_html(year));
            }
            if !v.is_empty() {
                meta_parts.push(escape_html(v));
            }
            let meta = meta_parts.join(" | ");

            let links: Vec<String> = [
                make_link(f.get("pdf").map(String::as_str).unwrap_or(""), "PDF"),
                make_link(&doi_to_url(f.get("doi").map(String::as_str).unwrap_or("")), "DOI"),
                make_link(f.get("url").map(String::as_str).unwrap_or(""), "Publisher"),
            ]
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect();

            format!(
                "<div class=\"card\">\n  <div class=\"card-title\">{}</div>\n  <div class=\"card-meta\">{}</div>\n  <div class=\"card-actions\">{}</div>\n</div>",
                escape_html(title),
                meta,
                links.join("")
            )
        })
        .collect();

    if cards.is_empty() {
        "<p>No publications found.</p>".to_string()
    } else {
        cards.join("\n")
    }
}

/// Renders co-author names as title-only cards.
pub fn coauthor_cards(names: &[String]) -> String {
    if names.is_empty() {
        return "<p>No co-authors found.</p>".to_string();
    }
    names
        .iter()
        .map(|name| {
            format!(
                "<div class=\"card\">\n  <div class=\"card-title\">{}</div>\n</div>",
                escape_html(name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders project or grant records as cards.
///
/// Records without a name are skipped. The meta line carries duration,
/// funding, and collaborators; detail lines carry PI, Co-PI, and keywords;
/// the actions row carries the role badge and a Details link when a website
/// is present. Divs with no content are omitted entirely.
pub fn project_cards(records: &[ProjectRecord]) -> String {
    let cards: Vec<String> = records.iter().filter_map(project_card).collect();
    cards.join("\n")
}

fn project_card(record: &ProjectRecord) -> Option<String> {
    let title = record.name.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        return None;
    }

    let mut meta_parts = Vec::new();
    if let Some(duration) = non_empty(&record.duration) {
        meta_parts.push(format!("Duration: {}", escape_html(duration)));
    }
    if let Some(funding) = non_empty(&record.funding) {
        meta_parts.push(format!("Funding: {}", escape_html(funding)));
    }
    if let Some(collaborators) = non_empty(&record.collaborators) {
        meta_parts.push(format!("Collaborators: {}", escape_html(collaborators)));
    }

    let mut detail_lines = Vec::new();
    if let Some(pi) = non_empty(&record.pi) {
        detail_lines.push(format!("PI: {}", escape_html(pi)));
    }
    if let Some(co_pi) = non_empty(&record.co_pi) {
        detail_lines.push(format!("Co-PI: {}", escape_html(co_pi)));
    }
    if let Some(keywords) = non_empty(&record.keywords) {
        detail_lines.push(format!("Keywords: {}", escape_html(keywords)));
    }

    let mut card = String::from("<div class=\"card\">\n");
    card.push_str(&format!(
        "  <div class=\"card-title\"><span class=\"card-title-text\">{}</span></div>\n",
        escape_html(title)
    ));
    if !meta_parts.is_empty() {
        card.push_str(&format!(
            "  <div class=\"card-meta\">{}</div>\n",
            meta_parts.join(" | ")
        ));
    }
    if !detail_lines.is_empty() {
        card.push_str(&format!(
            "  <div class=\"card-description\">{}</div>\n",
            detail_lines.join("<br>")
        ));
    }

    let role = non_empty(&record.role);
    let website = non_empty(&record.website);
    if role.is_some() || website.is_some() {
        card.push_str("  <div class=\"card-actions\">");
        if let Some(role) = role {
            card.push_str(&format!(
                "<span class=\"badge {}\">Role: {}</span>",
                role_badge_class(role),
                escape_html(role)
            ));
        }
        if let Some(website) = website {
            card.push_str(&make_link(website, "Details"));
        }
        card.push_str("</div>\n");
    }
    card.push_str("</div>");
    Some(card)
}

/// Renders the stats grid summarizing projects and grants.
///
/// The projects group is always present; the grants group only when there
/// are grant records. PI and funding stats are shown only when positive.
pub fn stats_grid(projects: &[ProjectRecord], grants: &[ProjectRecord]) -> String {
    let mut sections = vec![stat_group("Projects", "Total Projects", projects)];
    if !grants.is_empty() {
        sections.push(stat_group("Grants", "Total Grants", grants));
    }
    sections.join("\n")
}

fn stat_group(title: &str, total_label: &str, records: &[ProjectRecord]) -> String {
    let stats = section_stats(records);

    let mut items = vec![stat_item(&stats.total.to_string(), total_label)];
    if stats.pi_count > 0 {
        items.push(stat_item(
            &stats.pi_count.to_string(),
            "Principal Investigator",
        ));
    }
    if stats.funding_total > 0.0 {
        items.push(stat_item(&format_usd(stats.funding_total), "Total Funding"));
    }

    format!(
        "<div class=\"stat-group\">\n  <div class=\"group-title\">{}</div>\n  <div class=\"group-stats\">\n{}\n  </div>\n</div>",
        title,
        items.join("\n")
    )
}

fn stat_item(number: &str, label: &str) -> String {
    format!(
        "    <div class=\"stat\">\n      <div class=\"stat-number\">{}</div>\n      <div class=\"stat-label\">{}</div>\n    </div>",
        number, label
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
