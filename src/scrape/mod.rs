//! Row-level extraction over raw HTML text.
//!
//! The source pages are malformed enough (data rows outside any `<table>`,
//! unquoted attributes) that an HTML5 structural parse reshapes them and loses
//! the rows, so both scrapers walk the markup with patterns instead. Any
//! structural drift on a source site yields fewer rows, never an error.

pub mod lotto;
pub mod pools;

use std::sync::LazyLock;

use regex::Regex;

static ROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<tr[^>]*>.*?</tr>").unwrap());
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td[^>]*>(.*?)</td>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Row fragments of a region, opening tag included, in document order.
pub(crate) fn rows(region: &str) -> impl Iterator<Item = &str> {
    ROW_RE.find_iter(region).map(|m| m.as_str())
}

/// Cleaned cell texts of one row fragment.
pub(crate) fn row_cells(row_html: &str) -> Vec<String> {
    CELL_RE
        .captures_iter(row_html)
        .filter_map(|caps| caps.get(1))
        .map(|m| clean_cell(m.as_str()))
        .collect()
}

/// Strip embedded markup, decode the entities the source pages use, collapse
/// whitespace runs and trim.
pub(crate) fn clean_cell(raw: &str) -> String {
    let text = TAG_RE.replace_all(raw, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    WS_RE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_cell_strips_tags_and_trims() {
        assert_eq!(clean_cell(" <b>1234</b> "), "1234");
        assert_eq!(clean_cell("<span class=\"num\">56 78</span>"), "56 78");
    }

    #[test]
    fn clean_cell_decodes_common_entities() {
        assert_eq!(clean_cell("&nbsp;2024-01-01&nbsp;"), "2024-01-01");
        assert_eq!(clean_cell("a &amp; b"), "a & b");
    }

    #[test]
    fn clean_cell_collapses_whitespace_runs() {
        assert_eq!(clean_cell("  12\n\t 34  "), "12 34");
    }

    #[test]
    fn row_cells_returns_cells_in_order() {
        let row = "<tr><td>a</td><td class=\"x\">b</td><td>c</td></tr>";
        assert_eq!(row_cells(row), vec!["a", "b", "c"]);
    }

    #[test]
    fn rows_include_opening_tag_attributes() {
        let region = "<tr class=\"banner\"><td>x</td></tr><tr><td>y</td></tr>";
        let found: Vec<&str> = rows(region).collect();
        assert_eq!(found.len(), 2);
        assert!(found[0].contains("class=\"banner\""));
    }
}
