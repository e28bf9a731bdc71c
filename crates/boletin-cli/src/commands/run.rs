use boletin_core::config::Config;
use boletin_core::error::BoletinError;
use boletin_core::extraction::pdftotext::PdftotextExtractor;
use boletin_core::pipeline::{self, Outcome, RunSummary};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_dir: PathBuf,
    bronze_dir: PathBuf,
    silver_dir: PathBuf,
    consolidated: String,
) -> Result<(), BoletinError> {
    if !PdftotextExtractor::is_available() {
        return Err(BoletinError::PdftotextNotFound);
    }

    let config = Config {
        input_dir,
        bronze_dir,
        silver_dir,
        consolidated_name: consolidated,
        ..Config::default()
    };

    let extractor = PdftotextExtractor::new();
    let summary = pipeline::run(&config, &extractor)?;
    output::table::print_summary(&summary);
    Ok(())
}

/// Re-run the silver tier only: transform whatever is in the bronze
/// directory and rebuild the consolidated dataset from it.
pub fn consolidate(
    bronze_dir: PathBuf,
    silver_dir: PathBuf,
    consolidated: String,
) -> Result<(), BoletinError> {
    let config = Config {
        bronze_dir,
        silver_dir,
        consolidated_name: consolidated,
        ..Config::default()
    };
    std::fs::create_dir_all(&config.silver_dir)?;

    let mut summary = RunSummary::default();
    let mut tables = Vec::new();
    for outcome in pipeline::transform_stage(&config)? {
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
    boletin_core::consolidate(&tables, &config.silver_dir.join(&config.consolidated_name))?;

    output::table::print_summary(&summary);
    Ok(())
}
