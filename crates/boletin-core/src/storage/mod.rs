pub mod bronze;
pub mod parquet;
