use boletin_core::model::{CanonicalRow, ParsedBulletin, ParsedRows};
use boletin_core::pipeline::RunSummary;

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn opt_num(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "-".to_string(),
    }
}

pub fn print_parsed(parsed: &ParsedBulletin) {
    println!("=== {} ({}) ===\n", parsed.bulletin_id, parsed.date);

    match &parsed.rows {
        ParsedRows::Legacy(rows) => {
            let width = rows.iter().map(|r| r.producto.len()).max().unwrap_or(10);
            for r in rows {
                println!(
                    "  {:<width$}  {:<12} {} {} {}",
                    r.producto,
                    r.presentacion.as_deref().unwrap_or("-"),
                    opt_num(r.precio_calidad_extra),
                    opt_num(r.precio_calidad_primera),
                    opt_num(r.valor_x_kilo),
                    width = width
                );
            }
        }
        ParsedRows::Current(rows) => {
            let width = rows.iter().map(|r| r.producto.len()).max().unwrap_or(10);
            for r in rows {
                println!(
                    "  {:<width$}  {:<12} {:>5} {:<12} {} {} {}  {}",
                    r.producto,
                    r.presentacion,
                    r.cantidad,
                    r.unidad,
                    r.precio_extra,
                    r.precio_primera,
                    r.precio_unidad,
                    r.variacion.as_deref().unwrap_or("-"),
                    width = width
                );
            }
        }
    }
}

pub fn print_canonical(rows: &[CanonicalRow]) {
    let width = rows
        .iter()
        .map(|r| r.producto.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(10);

    for r in rows {
        println!(
            "  {:<width$}  {:<12} {:>7} {:<12} {} {} {}  {}",
            opt(&r.producto),
            opt(&r.presentacion),
            opt_num(r.cantidad),
            opt(&r.unidad),
            opt_num(r.precio_extra),
            opt_num(r.precio_primera),
            opt_num(r.precio_unidad),
            opt(&r.variacion),
            width = width
        );
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!("Run summary:");
    println!("  extracted:          {}", summary.extracted);
    println!("  transformed:        {}", summary.transformed);
    println!("  skipped:            {}", summary.skipped);
    println!("  failed:             {}", summary.failed);
    println!("  consolidated rows:  {}", summary.consolidated_rows);
}
