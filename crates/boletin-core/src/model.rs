use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::version::LayoutVersion;

/// One product row in the pre-cutover layout. Prices are coerced in the
/// parser's post-pass; everything else stays as printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyRow {
    pub producto: String,
    pub presentacion: Option<String>,
    pub cantidad: Option<String>,
    pub unidad: Option<String>,
    pub precio_calidad_extra: Option<f64>,
    pub precio_calidad_primera: Option<f64>,
    pub valor_x_kilo: Option<f64>,
}

/// One product row in the post-cutover layout. Prices keep their printed
/// grouping ("45.000"); the silver stage coerces them to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentRow {
    pub producto: String,
    pub presentacion: String,
    pub cantidad: String,
    pub unidad: String,
    pub precio_extra: String,
    pub precio_primera: String,
    pub precio_unidad: String,
    pub variacion: Option<String>,
}

/// Rows parsed from one bulletin, tagged by the layout that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParsedRows {
    Legacy(Vec<LegacyRow>),
    Current(Vec<CurrentRow>),
}

impl ParsedRows {
    pub fn version(&self) -> LayoutVersion {
        match self {
            ParsedRows::Legacy(_) => LayoutVersion::Legacy,
            ParsedRows::Current(_) => LayoutVersion::Current,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ParsedRows::Legacy(rows) => rows.len(),
            ParsedRows::Current(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parsed bulletin, ready for the bronze tier.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedBulletin {
    pub bulletin_id: String,
    pub date: NaiveDate,
    pub rows: ParsedRows,
}

/// A generic header + cells table read back from a bronze CSV. Cells are
/// kept as written; the empty string means missing.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The reconciled row shape every bulletin converges to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRow {
    pub producto: Option<String>,
    pub presentacion: Option<String>,
    pub cantidad: Option<f64>,
    pub unidad: Option<String>,
    pub precio_extra: Option<f64>,
    pub precio_primera: Option<f64>,
    pub precio_unidad: Option<f64>,
    pub variacion: Option<String>,
    pub source_file: String,
}

/// Column order of the consolidated dataset.
pub const CANONICAL_COLUMNS: [&str; 9] = [
    "producto",
    "presentacion",
    "cantidad",
    "unidad",
    "precio_extra",
    "precio_primera",
    "precio_unidad",
    "variacion",
    "source_file",
];
