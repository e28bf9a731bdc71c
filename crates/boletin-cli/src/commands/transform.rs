use boletin_core::config::Config;
use boletin_core::error::BoletinError;
use std::path::PathBuf;

use crate::output;

pub fn run(csv_file: PathBuf, output_format: &str, silver_dir: PathBuf) -> Result<(), BoletinError> {
    let config = Config {
        silver_dir,
        ..Config::default()
    };
    std::fs::create_dir_all(&config.silver_dir)?;

    let rows = boletin_core::transform_table(&csv_file, &config)?;

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
        _ => output::table::print_canonical(&rows),
    }

    eprintln!("Transformed {} row(s) into {}", rows.len(), config.silver_dir.display());
    Ok(())
}
