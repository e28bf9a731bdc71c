//! Line grammar for bulletins published before the layout cutover.
//!
//! Legacy pages print three currency columns (extra quality, first
//! quality, per-kilo value) and no variation marker. There are no fixed
//! column boundaries; rows are recovered best-effort from each line's
//! currency tokens and whatever text precedes them.

use crate::model::LegacyRow;
use crate::transform::coerce::coerce_price;
use regex::Regex;
use std::sync::LazyLock;

/// Currency amount as printed in pre-cutover bulletins:
/// `$ 45.000`, `$900`, `$ 900,00`.
static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s?\d{1,3}(?:\.\d{3})*(?:,\d{2})?").unwrap());

/// Words that only occur in column headers and section labels.
const HEADER_WORDS: [&str; 8] = [
    "nombre",
    "presentación",
    "presentacion",
    "unidad",
    "valor",
    "cal.",
    "análisis",
    "analisis",
];

fn is_header_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_WORDS.iter().any(|w| lower.contains(w))
}

/// Parse whitespace-collapsed lines into legacy rows.
pub fn parse_lines(lines: &[String]) -> Vec<LegacyRow> {
    lines.iter().filter_map(|line| parse_line(line)).collect()
}

/// Try to parse one line as a product row.
///
/// Header lines and lines without a currency amount yield None. The first
/// three currency tokens become the price columns (extras are ignored);
/// the rest of the line is split into product name and trailing
/// presentation/quantity/unit fields.
pub fn parse_line(line: &str) -> Option<LegacyRow> {
    if is_header_line(line) {
        return None;
    }

    let prices: Vec<&str> = CURRENCY.find_iter(line).map(|m| m.as_str()).collect();
    if prices.is_empty() {
        return None;
    }

    let remainder = CURRENCY.replace_all(line, "");
    let parts: Vec<&str> = remainder.split_whitespace().collect();

    // With 4+ tokens the last three are presentation, quantity and unit.
    // With exactly 3, bulletins of this era print the packaging count
    // fused to the name ("Papa criolla x50"), so only the last token is
    // split off as the presentation.
    let (producto, presentacion, cantidad, unidad) = match parts.len() {
        n if n > 3 => (
            parts[..n - 3].join(" "),
            Some(parts[n - 3].to_string()),
            Some(parts[n - 2].to_string()),
            Some(parts[n - 1].to_string()),
        ),
        3 => (
            parts[..2].join(" "),
            Some(parts[2].to_string()),
            None,
            None,
        ),
        _ => (parts.join(" "), None, None, None),
    };

    Some(LegacyRow {
        producto,
        presentacion,
        cantidad,
        unidad,
        precio_calidad_extra: prices.first().and_then(|p| coerce_price(p)),
        precio_calidad_primera: prices.get(1).and_then(|p| coerce_price(p)),
        valor_x_kilo: prices.get(2).and_then(|p| coerce_price(p)),
    })
}
