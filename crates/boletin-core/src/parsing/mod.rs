pub mod current;
pub mod legacy;

use crate::extraction::PageContent;
use crate::model::ParsedRows;
use crate::version::LayoutVersion;

/// Collapse internal whitespace to single spaces and trim.
pub(crate) fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse extracted page text into rows using the layout the bulletin's
/// publication date calls for. Pure: no file I/O happens here.
pub fn extract_rows(pages: &[PageContent], version: LayoutVersion) -> ParsedRows {
    let lines: Vec<String> = pages
        .iter()
        .flat_map(|p| p.lines.iter())
        .map(|l| normalize_ws(l))
        .filter(|l| !l.is_empty())
        .collect();

    match version {
        LayoutVersion::Legacy => ParsedRows::Legacy(legacy::parse_lines(&lines)),
        LayoutVersion::Current => ParsedRows::Current(current::parse_lines(&lines)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("  Papa   criolla \t x50 "), "Papa criolla x50");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn test_extract_rows_spans_pages() {
        let pages = vec![
            page(1, &["Papa criolla x50 $ 45.000 $ 40.000 $ 900,00"]),
            page(2, &["", "Arveja verde Bulto 50 Kilos $ 52.000 $ 48.000 $ 1.040,00"]),
        ];
        let rows = extract_rows(&pages, LayoutVersion::Legacy);
        assert_eq!(rows.version(), LayoutVersion::Legacy);
        assert_eq!(rows.len(), 2);
    }
}
