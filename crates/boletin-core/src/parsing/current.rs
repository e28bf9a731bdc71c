//! Line grammar for bulletins published on or after the layout cutover.
//!
//! Current pages anchor each row on a packaging keyword (BULTO, ATADO,
//! ...) followed by quantity and unit, then three numeric price columns
//! and an optional trend marker. Prices are kept as printed; the silver
//! stage coerces them.

use crate::model::CurrentRow;

/// Packaging types that start the presentation/quantity/unit block.
const PACKAGING_KEYWORDS: [&str; 7] = [
    "BULTO",
    "ATADO",
    "CANASTILLA",
    "BOLSA",
    "KILO",
    "CAJA",
    "LIBRA",
];

/// Words that only occur in column headers.
const HEADER_WORDS: [&str; 4] = ["precio", "unidad", "calidad", "nombre"];

fn is_header_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_WORDS.iter().any(|w| lower.contains(w))
}

/// A token that can plausibly be a price: currency-prefixed digits, or a
/// pure digit run of length 3+ once grouping separators are stripped.
fn is_price_like(token: &str) -> bool {
    if let Some(rest) = token.strip_prefix('$') {
        if rest.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
            return true;
        }
    }
    let stripped: String = token.chars().filter(|c| *c != '.' && *c != ',').collect();
    stripped.len() >= 3 && stripped.chars().all(|c| c.is_ascii_digit())
}

fn has_digit(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

/// Parse whitespace-collapsed lines into current-layout rows, then drop
/// structurally invalid ones (product name of 2 characters or less, or a
/// missing primary price).
pub fn parse_lines(lines: &[String]) -> Vec<CurrentRow> {
    lines
        .iter()
        .filter_map(|line| parse_line(line))
        .filter(|row| row.producto.trim().chars().count() > 2 && !row.precio_extra.is_empty())
        .collect()
}

/// Try to parse one line as a product row.
///
/// Rejection conditions, in order: header line; no digit anywhere (every
/// currency amount and grouped number carries one); fewer than two
/// price-like tokens; no packaging keyword, or fewer than two tokens
/// after it; fewer than three digit-bearing tokens after the unit.
pub fn parse_line(line: &str) -> Option<CurrentRow> {
    if is_header_line(line) {
        return None;
    }
    if !has_digit(line) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.iter().filter(|t| is_price_like(t)).count() < 2 {
        return None;
    }

    let anchor = tokens.iter().position(|t| {
        let upper = t.to_uppercase();
        PACKAGING_KEYWORDS.iter().any(|k| *k == upper)
    })?;
    if anchor + 2 >= tokens.len() {
        return None;
    }

    let producto = tokens[..anchor].join(" ");
    let presentacion = tokens[anchor].to_string();
    let cantidad = tokens[anchor + 1].to_string();
    let unidad = tokens[anchor + 2].to_string();

    // Three price columns follow the unit; keep only digits and grouping.
    let mut precios = tokens[anchor + 3..]
        .iter()
        .filter(|t| has_digit(t))
        .take(3)
        .map(|t| {
            t.chars()
                .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
                .collect::<String>()
        });
    let precio_extra = precios.next()?;
    let precio_primera = precios.next()?;
    let precio_unidad = precios.next()?;

    // The trend marker is the last token carrying no digit at all.
    let variacion = tokens
        .iter()
        .rev()
        .find(|t| !has_digit(t))
        .map(|t| t.to_string());

    Some(CurrentRow {
        producto,
        presentacion,
        cantidad,
        unidad,
        precio_extra,
        precio_primera,
        precio_unidad,
        variacion,
    })
}
