mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boletin",
    version,
    about = "Price-bulletin extraction pipeline for wholesale food markets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one bulletin PDF into a bronze CSV table
    Extract {
        /// Path to the bulletin PDF (file name must carry a YYYY-MM-DD token)
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Directory for the bronze CSV
        #[arg(long, default_value = "data/bronze")]
        bronze_dir: PathBuf,
    },
    /// Reconcile one bronze CSV into the canonical schema
    Transform {
        /// Path to a bronze CSV table
        csv_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Directory for the silver Parquet files
        #[arg(long, default_value = "data/silver")]
        silver_dir: PathBuf,
    },
    /// Extract, transform and consolidate every bulletin in the input directory
    Run {
        /// Directory scanned for bulletin PDFs
        #[arg(long, default_value = "data/raw_pdfs")]
        input_dir: PathBuf,

        /// Directory for per-bulletin CSV tables
        #[arg(long, default_value = "data/bronze")]
        bronze_dir: PathBuf,

        /// Directory for Parquet output
        #[arg(long, default_value = "data/silver")]
        silver_dir: PathBuf,

        /// File name of the consolidated Parquet artifact
        #[arg(long, default_value = "all_data.parquet")]
        consolidated: String,
    },
    /// Transform and consolidate existing bronze tables without re-extracting
    Consolidate {
        /// Directory holding bronze CSV tables
        #[arg(long, default_value = "data/bronze")]
        bronze_dir: PathBuf,

        /// Directory for Parquet output
        #[arg(long, default_value = "data/silver")]
        silver_dir: PathBuf,

        /// File name of the consolidated Parquet artifact
        #[arg(long, default_value = "all_data.parquet")]
        consolidated: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            output,
            bronze_dir,
        } => commands::extract::run(pdf_file, &output, bronze_dir),
        Commands::Transform {
            csv_file,
            output,
            silver_dir,
        } => commands::transform::run(csv_file, &output, silver_dir),
        Commands::Run {
            input_dir,
            bronze_dir,
            silver_dir,
            consolidated,
        } => commands::run::run(input_dir, bronze_dir, silver_dir, consolidated),
        Commands::Consolidate {
            bronze_dir,
            silver_dir,
            consolidated,
        } => commands::run::consolidate(bronze_dir, silver_dir, consolidated),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
