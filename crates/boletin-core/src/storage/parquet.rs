//! Silver tier: canonical tables persisted as Parquet.

use crate::error::BoletinError;
use crate::model::{CanonicalRow, CANONICAL_COLUMNS};
use arrow_array::{ArrayRef, Float64Array, RecordBatch, StringArray};
use arrow_schema::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Arrow schema of the canonical table: the 8 reconciled columns plus
/// provenance, in canonical order.
pub fn canonical_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(CANONICAL_COLUMNS[0], DataType::Utf8, true),
        Field::new(CANONICAL_COLUMNS[1], DataType::Utf8, true),
        Field::new(CANONICAL_COLUMNS[2], DataType::Float64, true),
        Field::new(CANONICAL_COLUMNS[3], DataType::Utf8, true),
        Field::new(CANONICAL_COLUMNS[4], DataType::Float64, true),
        Field::new(CANONICAL_COLUMNS[5], DataType::Float64, true),
        Field::new(CANONICAL_COLUMNS[6], DataType::Float64, true),
        Field::new(CANONICAL_COLUMNS[7], DataType::Utf8, true),
        Field::new(CANONICAL_COLUMNS[8], DataType::Utf8, false),
    ]))
}

fn string_col<'a>(
    rows: &'a [CanonicalRow],
    get: impl Fn(&'a CanonicalRow) -> Option<&'a str>,
) -> ArrayRef {
    Arc::new(StringArray::from(
        rows.iter().map(get).collect::<Vec<_>>(),
    ))
}

fn float_col(rows: &[CanonicalRow], get: impl Fn(&CanonicalRow) -> Option<f64>) -> ArrayRef {
    Arc::new(Float64Array::from(
        rows.iter().map(get).collect::<Vec<_>>(),
    ))
}

/// Write canonical rows to a Parquet file, fully overwriting any prior
/// artifact of the same name.
pub fn write_canonical(path: &Path, rows: &[CanonicalRow]) -> Result<(), BoletinError> {
    let schema = canonical_schema();
    let batch = RecordBatch::try_new(
        schema,
        vec![
            string_col(rows, |r| r.producto.as_deref()),
            string_col(rows, |r| r.presentacion.as_deref()),
            float_col(rows, |r| r.cantidad),
            string_col(rows, |r| r.unidad.as_deref()),
            float_col(rows, |r| r.precio_extra),
            float_col(rows, |r| r.precio_primera),
            float_col(rows, |r| r.precio_unidad),
            string_col(rows, |r| r.variacion.as_deref()),
            string_col(rows, |r| Some(r.source_file.as_str())),
        ],
    )?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    fn row(producto: &str, precio_extra: Option<f64>, source: &str) -> CanonicalRow {
        CanonicalRow {
            producto: Some(producto.to_string()),
            presentacion: None,
            cantidad: None,
            unidad: None,
            precio_extra,
            precio_primera: None,
            precio_unidad: None,
            variacion: None,
            source_file: source.to_string(),
        }
    }

    fn read_back(path: &Path) -> (Vec<String>, usize) {
        let file = File::open(path).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let names: Vec<String> = builder
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();
        let reader = builder.build().unwrap();
        let rows = reader.map(|b| b.unwrap().num_rows()).sum();
        (names, rows)
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2025-02-25.parquet");
        let rows = vec![
            row("Papa criolla", Some(45000.0), "2025-02-24"),
            row("Tomate chonto", None, "2025-02-25"),
        ];

        write_canonical(&path, &rows).unwrap();
        let (names, count) = read_back(&path);

        assert_eq!(names, CANONICAL_COLUMNS);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_overwrite_replaces_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_data.parquet");

        let many: Vec<CanonicalRow> =
            (0..5).map(|i| row(&format!("p{i}"), None, "a")).collect();
        write_canonical(&path, &many).unwrap();
        write_canonical(&path, &many[..1]).unwrap();

        let (_, count) = read_back(&path);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_empty_table_is_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.parquet");
        write_canonical(&path, &[]).unwrap();
        let (_, count) = read_back(&path);
        assert_eq!(count, 0);
    }
}
