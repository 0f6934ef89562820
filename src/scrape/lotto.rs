//! Extractor for the lotto-style results page.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::model::ResultEntry;
use crate::scrape::{row_cells, rows};

static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<table[^>]*\bclass\s*=\s*["']?[^"'>]*lotto[^"'>]*["']?[^>]*>(.*?)</table>"#)
        .unwrap()
});
static COLSPAN4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)colspan\s*=\s*["']?4"#).unwrap());

/// Scrape (date, result) pairs from the lotto page.
///
/// The results table is located by its `lotto` class. This layout pads rows
/// with extra columns, so a row must yield at least four cells and the draw
/// date and result sit in the second and fourth. Decorative rows (banner ads,
/// full-width `colspan=4` separators) are dropped before cell extraction.
pub fn parse_doc(html: &str) -> Vec<ResultEntry> {
    let region = match TABLE_RE.captures(html).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => {
            tracing::warn!("lotto page: results table not found, no entries extracted");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for row in rows(region) {
        if is_decorative_row(row) {
            continue;
        }
        let cols = row_cells(row);
        if cols.len() < 4 {
            continue;
        }
        entries.push(ResultEntry {
            tanggal: cols[1].clone(),
            hasil: cols[3].clone(),
        });
    }

    if entries.is_empty() {
        tracing::warn!("lotto page: results table found but no qualifying rows");
    }
    entries
}

fn is_decorative_row(row_html: &str) -> bool {
    let lc = row_html.to_ascii_lowercase();
    lc.contains("banner") || COLSPAN4_RE.is_match(&lc)
}
