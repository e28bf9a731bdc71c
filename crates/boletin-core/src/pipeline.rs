//! Batch stages over a directory of bulletins.
//!
//! Each bulletin is a pure function of its own file plus the config, so a
//! failure in one never aborts its siblings; every file reports its own
//! outcome. Consolidation is the single join point and runs only after
//! every transformation has finished.

use crate::config::Config;
use crate::error::BoletinError;
use crate::extraction::PdfExtractor;
use crate::model::{CanonicalRow, ParsedBulletin};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-file result of a pipeline stage. Skips are expected conditions
/// (no date in the name, unknown table shape); failures are everything
/// else. Neither stops the batch.
#[derive(Debug)]
pub enum Outcome<T> {
    Ok(T),
    Skipped(String),
    Failed(BoletinError),
}

impl<T> From<Result<T, BoletinError>> for Outcome<T> {
    fn from(result: Result<T, BoletinError>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e @ BoletinError::MissingDateToken { .. })
            | Err(e @ BoletinError::UnrecognizedSchema { .. }) => Outcome::Skipped(e.to_string()),
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// Counts reported at the end of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    pub extracted: usize,
    pub transformed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub consolidated_rows: usize,
}

/// Files in `dir` with the given extension (case-insensitive), sorted.
fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BoletinError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Extract every bulletin in the input directory into the bronze tier.
///
/// Errors only when the directory holds no bulletins at all; anything
/// going wrong with an individual file becomes that file's outcome.
pub fn extract_stage(
    config: &Config,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<Outcome<ParsedBulletin>>, BoletinError> {
    let pdfs = list_files(&config.input_dir, "pdf")?;
    if pdfs.is_empty() {
        return Err(BoletinError::EmptyInput(format!(
            "no PDF bulletins in {}",
            config.input_dir.display()
        )));
    }

    let outcomes = pdfs
        .iter()
        .map(|pdf| {
            let outcome = Outcome::from(crate::process_bulletin(pdf, extractor, config));
            match &outcome {
                Outcome::Ok(parsed) => {
                    tracing::info!(file = %pdf.display(), rows = parsed.rows.len(), "bulletin extracted");
                }
                Outcome::Skipped(reason) => {
                    tracing::warn!(file = %pdf.display(), reason = %reason, "bulletin skipped");
                }
                Outcome::Failed(error) => {
                    tracing::warn!(file = %pdf.display(), error = %error, "bulletin failed");
                }
            }
            outcome
        })
        .collect();
    Ok(outcomes)
}

/// Transform every bronze table into canonical rows in the silver tier.
pub fn transform_stage(config: &Config) -> Result<Vec<Outcome<Vec<CanonicalRow>>>, BoletinError> {
    let csvs = list_files(&config.bronze_dir, "csv")?;
    if csvs.is_empty() {
        return Err(BoletinError::EmptyInput(format!(
            "no bronze tables in {}",
            config.bronze_dir.display()
        )));
    }

    let outcomes = csvs
        .iter()
        .map(|csv| {
            let outcome = Outcome::from(crate::transform_table(csv, config));
            match &outcome {
                Outcome::Ok(rows) => {
                    tracing::info!(file = %csv.display(), rows = rows.len(), "table transformed");
                }
                Outcome::Skipped(reason) => {
                    tracing::warn!(file = %csv.display(), reason = %reason, "table skipped");
                }
                Outcome::Failed(error) => {
                    tracing::warn!(file = %csv.display(), error = %error, "table failed");
                }
            }
            outcome
        })
        .collect();
    Ok(outcomes)
}

/// Full batch: extract every bulletin, transform every bronze table, then
/// consolidate behind the barrier.
pub fn run(config: &Config, extractor: &dyn PdfExtractor) -> Result<RunSummary, BoletinError> {
    fs::create_dir_all(&config.bronze_dir)?;
    fs::create_dir_all(&config.silver_dir)?;

    let mut summary = RunSummary::default();

    for outcome in extract_stage(config, extractor)? {
        match outcome {
            Outcome::Ok(_) => summary.extracted += 1,
            Outcome::Skipped(_) => summary.skipped += 1,
            Outcome::Failed(_) => summary.failed += 1,
        }
    }

    let mut tables = Vec::new();
    for outcome in transform_stage(config)? {
        match outcome {
            Outcome::Ok(rows) => {
                summary.transformed += 1;
                tables.push(rows);
            }
            Outcome::Skipped(_) => summary.skipped += 1,
            Outcome::Failed(_) => summary.failed += 1,
        }
    }

    summary.consolidated_rows = tables.iter().map(Vec::len).sum();
    crate::consolidate(&tables, &config.silver_dir.join(&config.consolidated_name))?;

    tracing::info!(
        extracted = summary.extracted,
        transformed = summary.transformed,
        skipped = summary.skipped,
        failed = summary.failed,
        rows = summary.consolidated_rows,
        "run complete"
    );
    Ok(summary)
}
