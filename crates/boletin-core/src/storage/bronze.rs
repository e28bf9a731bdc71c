//! Bronze tier: per-bulletin intermediate CSV tables.

use crate::error::BoletinError;
use crate::model::{ParsedRows, RawTable};
use std::path::Path;

/// Write a parsed bulletin to its bronze CSV, replacing any previous one.
/// Headers come from the row struct's field names.
pub fn write_csv(path: &Path, rows: &ParsedRows) -> Result<(), BoletinError> {
    let mut writer = csv::Writer::from_path(path)?;
    match rows {
        ParsedRows::Legacy(rows) => {
            for row in rows {
                writer.serialize(row)?;
            }
        }
        ParsedRows::Current(rows) => {
            for row in rows {
                writer.serialize(row)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Read any headered CSV into a generic table. Cells are kept as written;
/// the transform stage must accept bronze files written by older runs with
/// arbitrary headers, so nothing is interpreted here.
pub fn read_csv(path: &Path) -> Result<RawTable, BoletinError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(RawTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrentRow, LegacyRow};

    #[test]
    fn test_legacy_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2025-02-24.csv");
        let rows = ParsedRows::Legacy(vec![LegacyRow {
            producto: "Papa criolla".to_string(),
            presentacion: Some("x50".to_string()),
            cantidad: None,
            unidad: None,
            precio_calidad_extra: Some(45000.0),
            precio_calidad_primera: Some(40000.0),
            valor_x_kilo: Some(900.0),
        }]);

        write_csv(&path, &rows).unwrap();
        let table = read_csv(&path).unwrap();

        assert_eq!(
            table.columns,
            vec![
                "producto",
                "presentacion",
                "cantidad",
                "unidad",
                "precio_calidad_extra",
                "precio_calidad_primera",
                "valor_x_kilo",
            ]
        );
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Papa criolla");
        assert_eq!(table.rows[0][2], ""); // missing cantidad is an empty cell
    }

    #[test]
    fn test_current_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2025-02-25.csv");
        let rows = ParsedRows::Current(vec![CurrentRow {
            producto: "Tomate chonto".to_string(),
            presentacion: "BULTO".to_string(),
            cantidad: "50".to_string(),
            unidad: "KILOGRAMOS".to_string(),
            precio_extra: "45.000".to_string(),
            precio_primera: "40.000".to_string(),
            precio_unidad: "900".to_string(),
            variacion: Some("▲".to_string()),
        }]);

        write_csv(&path, &rows).unwrap();
        let table = read_csv(&path).unwrap();

        assert!(table.columns.contains(&"precio_extra".to_string()));
        assert_eq!(table.rows[0][4], "45.000");
        assert_eq!(table.rows[0][7], "▲");
    }

    #[test]
    fn test_empty_table_reads_back_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_csv(&path, &ParsedRows::Legacy(vec![])).unwrap();
        let table = read_csv(&path).unwrap();
        assert!(table.rows.is_empty());
    }
}
