use boletin_core::config::Config;
use boletin_core::error::BoletinError;
use boletin_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(pdf_file: PathBuf, output_format: &str, bronze_dir: PathBuf) -> Result<(), BoletinError> {
    if !PdftotextExtractor::is_available() {
        return Err(BoletinError::PdftotextNotFound);
    }

    let config = Config {
        bronze_dir,
        ..Config::default()
    };
    std::fs::create_dir_all(&config.bronze_dir)?;

    let extractor = PdftotextExtractor::new();
    let parsed = boletin_core::process_bulletin(&pdf_file, &extractor, &config)?;

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&parsed)?),
        _ => output::table::print_parsed(&parsed),
    }

    eprintln!(
        "Extracted {} row(s) from {} ({} layout), bronze table written to {}",
        parsed.rows.len(),
        parsed.bulletin_id,
        parsed.rows.version(),
        config.bronze_dir.join(format!("{}.csv", parsed.bulletin_id)).display()
    );
    Ok(())
}
