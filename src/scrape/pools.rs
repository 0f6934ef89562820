//! Extractor for the pools-style results page.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::model::ResultEntry;
use crate::scrape::{row_cells, rows};

static CONTAINER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div[^>]*\bid\s*=\s*["']?all["']?[^>]*>(.*?)</div>"#).unwrap()
});

/// Scrape (date, result) pairs from the pools page.
///
/// The data rows sit directly inside `<div id="all">`. A row qualifies when it
/// yields at least two non-empty cells: the first is the draw date, the second
/// the result. A page without the container yields no entries.
pub fn parse_doc(html: &str) -> Vec<ResultEntry> {
    let region = match CONTAINER_RE.captures(html).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => {
            tracing::warn!("pools page: container div#all not found, no entries extracted");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for row in rows(region) {
        let cols: Vec<String> = row_cells(row)
            .into_iter()
            .filter(|cell| !cell.is_empty())
            .collect();
        if cols.len() < 2 {
            continue;
        }
        entries.push(ResultEntry {
            tanggal: cols[0].clone(),
            hasil: cols[1].clone(),
        });
    }

    if entries.is_empty() {
        tracing::warn!("pools page: container found but no qualifying rows");
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_rows_inside_container() {
        let doc = r#"<div id="all"><tr><td>2024-01-01</td><td>1234</td></tr></div>"#;

        let out = parse_doc(doc);
        assert_eq!(
            out,
            vec![ResultEntry {
                tanggal: "2024-01-01".to_string(),
                hasil: "1234".to_string(),
            }]
        );
    }

    #[test]
    fn parses_rows_in_document_order() {
        let doc = r#"
            <html><body>
              <div id="all">
                <table>
                  <tr><td>2024-01-03</td><td>9012</td></tr>
                  <tr><td>2024-01-02</td><td>5678</td></tr>
                  <tr><td>2024-01-01</td><td>1234</td></tr>
                </table>
              </div>
            </body></html>"#;

        let out = parse_doc(doc);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].tanggal, "2024-01-03");
        assert_eq!(out[0].hasil, "9012");
        assert_eq!(out[2].tanggal, "2024-01-01");
        assert_eq!(out[2].hasil, "1234");
    }

    #[test]
    fn strips_markup_and_whitespace_from_cells() {
        let doc = r#"
            <div id="all">
              <tr><td> <b>2024-01-02</b> </td><td>&nbsp;<span>5678</span>&nbsp;</td></tr>
            </div>"#;

        let out = parse_doc(doc);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tanggal, "2024-01-02");
        assert_eq!(out[0].hasil, "5678");
    }

    #[test]
    fn skips_rows_with_fewer_than_two_nonempty_cells() {
        let doc = r#"
            <div id="all">
              <tr><td>2024-01-05</td></tr>
              <tr><td>2024-01-04</td><td>   </td></tr>
              <tr><td></td><td>4321</td></tr>
              <tr><td>2024-01-03</td><td>1111</td></tr>
            </div>"#;

        let out = parse_doc(doc);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tanggal, "2024-01-03");
        assert_eq!(out[0].hasil, "1111");
    }

    #[test]
    fn tolerates_attribute_quoting_variants() {
        let doc = r#"<div class="wrap" id='all' data-page="1">
            <tr><td>2024-01-06</td><td>2468</td></tr>
        </div>"#;

        let out = parse_doc(doc);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].hasil, "2468");
    }

    #[test]
    fn missing_container_yields_empty() {
        let doc = r#"<div id="other"><tr><td>2024-01-01</td><td>1234</td></tr></div>"#;
        assert!(parse_doc(doc).is_empty());
    }

    #[test]
    fn empty_document_yields_empty() {
        assert!(parse_doc("").is_empty());
    }
}
