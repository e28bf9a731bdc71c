//! Schema reconciliation: map a bronze table, whatever its vintage, onto
//! the canonical 8-column shape plus provenance.

pub mod coerce;
pub mod columns;

use crate::error::BoletinError;
use crate::model::{CanonicalRow, RawTable};
use crate::version::LayoutVersion;
use coerce::{coerce_price, coerce_quantity};
use columns::normalize_column_name;

/// Reconcile one bronze table into canonical rows.
///
/// Column names are normalized first, then the layout is detected from
/// column presence: `precio_calidad_extra` marks a legacy table,
/// `precio_extra` a current one. Tables matching neither are an error the
/// caller is expected to skip on. Columns the table lacks come out as
/// entirely missing; `variacion` is always missing for legacy tables
/// (that layout never carried the signal).
pub fn reconcile(table: &RawTable, source_file: &str) -> Result<Vec<CanonicalRow>, BoletinError> {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| normalize_column_name(c))
        .collect();
    let idx = |name: &str| columns.iter().position(|c| c == name);

    let version = if idx("precio_calidad_extra").is_some() {
        LayoutVersion::Legacy
    } else if idx("precio_extra").is_some() {
        LayoutVersion::Current
    } else {
        return Err(BoletinError::UnrecognizedSchema {
            file: source_file.to_string(),
        });
    };

    let (extra_col, primera_col, precio_unidad_col, variacion_col) = match version {
        LayoutVersion::Legacy => (
            idx("precio_calidad_extra"),
            idx("precio_calidad_primera"),
            idx("valor_x_kilo"),
            None,
        ),
        LayoutVersion::Current => (
            idx("precio_extra"),
            idx("precio_primera"),
            idx("precio_unidad"),
            idx("variacion"),
        ),
    };
    let producto_col = idx("producto");
    let presentacion_col = idx("presentacion");
    let cantidad_col = idx("cantidad");
    let unidad_col = idx("unidad");

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cell = |col: Option<usize>| {
                col.and_then(|i| row.get(i))
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
            };
            CanonicalRow {
                producto: cell(producto_col).map(str::to_string),
                presentacion: cell(presentacion_col).map(str::to_string),
                cantidad: cell(cantidad_col).and_then(coerce_quantity),
                unidad: cell(unidad_col).map(str::to_string),
                precio_extra: cell(extra_col).and_then(coerce_price),
                precio_primera: cell(primera_col).and_then(coerce_price),
                precio_unidad: cell(precio_unidad_col).and_then(coerce_price),
                variacion: cell(variacion_col).map(str::to_string),
                source_file: source_file.to_string(),
            }
        })
        .collect();

    Ok(rows)
}
