//! Extraction and consolidation engine for dated wholesale-market price
//! bulletins.
//!
//! The pipeline has three tiers: raw PDFs are parsed into per-bulletin
//! bronze CSV tables (two line grammars, selected by publication date),
//! bronze tables are reconciled into one canonical schema and persisted
//! as silver Parquet files, and all canonical tables are concatenated
//! into a single consolidated dataset.

pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod pipeline;
pub mod storage;
pub mod transform;
pub mod version;

use std::path::Path;

use config::Config;
use error::BoletinError;
use extraction::PdfExtractor;
use model::{CanonicalRow, ParsedBulletin};
use version::LayoutVersion;

/// Extract one bulletin: route by the date in its file name, parse every
/// page with the matching line grammar, and persist the bronze CSV.
pub fn process_bulletin(
    path: &Path,
    extractor: &dyn PdfExtractor,
    config: &Config,
) -> Result<ParsedBulletin, BoletinError> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let date = version::parse_bulletin_date(file_name)?;
    let layout = LayoutVersion::for_date(date, config.cutover);

    let bulletin_id = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    tracing::debug!(file = %path.display(), layout = %layout, "extracting bulletin");

    let pdf_bytes = std::fs::read(path)?;
    let pages = extractor.extract_pages(&pdf_bytes)?;
    let rows = parsing::extract_rows(&pages, layout);

    let csv_path = config.bronze_dir.join(format!("{bulletin_id}.csv"));
    storage::bronze::write_csv(&csv_path, &rows)?;
    tracing::debug!(file = %csv_path.display(), rows = rows.len(), "bronze table written");

    Ok(ParsedBulletin {
        bulletin_id,
        date,
        rows,
    })
}

/// Transform one bronze table into canonical rows and persist the silver
/// per-bulletin Parquet file.
pub fn transform_table(
    csv_path: &Path,
    config: &Config,
) -> Result<Vec<CanonicalRow>, BoletinError> {
    let bulletin_id = csv_path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let table = storage::bronze::read_csv(csv_path)?;
    let rows = transform::reconcile(&table, &bulletin_id)?;

    let parquet_path = config.silver_dir.join(format!("{bulletin_id}.parquet"));
    storage::parquet::write_canonical(&parquet_path, &rows)?;
    tracing::debug!(file = %parquet_path.display(), rows = rows.len(), "silver table written");

    Ok(rows)
}

/// Concatenate canonical tables, in processing order, and write the
/// consolidated dataset.
///
/// An empty list is a no-op: there is nothing to consolidate, and any
/// previous artifact is left untouched. Rows are never deduplicated;
/// re-running over overlapping bulletins duplicates them.
pub fn consolidate(tables: &[Vec<CanonicalRow>], output: &Path) -> Result<(), BoletinError> {
    if tables.is_empty() {
        tracing::warn!("no tables to consolidate");
        return Ok(());
    }

    let combined: Vec<CanonicalRow> = tables.iter().flatten().cloned().collect();
    storage::parquet::write_canonical(output, &combined)?;
    tracing::info!(file = %output.display(), rows = combined.len(), "consolidated dataset written");
    Ok(())
}
