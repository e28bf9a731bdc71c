use chrono::NaiveDate;
use std::path::PathBuf;

/// Pipeline configuration, constructed once at process start and passed
/// into every entry point. Nothing in the crate reads paths from anywhere
/// else.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for bulletin PDFs.
    pub input_dir: PathBuf,
    /// Directory for per-bulletin intermediate CSV tables.
    pub bronze_dir: PathBuf,
    /// Directory for per-bulletin and consolidated Parquet files.
    pub silver_dir: PathBuf,
    /// Publication date on which the bulletin switched layouts.
    /// Bulletins dated strictly before it use the legacy parser.
    pub cutover: NaiveDate,
    /// File name of the consolidated artifact inside `silver_dir`.
    pub consolidated_name: String,
}

/// The bulletin changed layout on 2025-02-25.
pub fn default_cutover() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 25).expect("valid date")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: PathBuf::from("data/raw_pdfs"),
            bronze_dir: PathBuf::from("data/bronze"),
            silver_dir: PathBuf::from("data/silver"),
            cutover: default_cutover(),
            consolidated_name: "all_data.parquet".to_string(),
        }
    }
}
