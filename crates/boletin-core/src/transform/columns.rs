/// Normalize a bulletin column header to a `[a-z0-9_]` identifier.
///
/// Lowercases, transliterates the Spanish accented characters, turns
/// space and hyphen into underscores, drops periods, then drops anything
/// else outside `[a-z0-9_]`. Applying it twice equals applying it once.
pub fn normalize_column_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        match c {
            'á' => out.push('a'),
            'é' => out.push('e'),
            'í' => out.push('i'),
            'ó' => out.push('o'),
            'ú' => out.push('u'),
            'ñ' => out.push('n'),
            ' ' | '-' => out.push('_'),
            'a'..='z' | '0'..='9' | '_' => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_and_spaces() {
        assert_eq!(normalize_column_name("Presentación"), "presentacion");
        assert_eq!(normalize_column_name("Precio Calidad Extra"), "precio_calidad_extra");
        assert_eq!(normalize_column_name("Valor-x-Kilo"), "valor_x_kilo");
    }

    #[test]
    fn test_periods_and_symbols_dropped() {
        assert_eq!(normalize_column_name("Cal. Extra"), "cal_extra");
        assert_eq!(normalize_column_name("Precio ($)"), "precio_");
        assert_eq!(normalize_column_name("Año"), "ano");
    }

    #[test]
    fn test_idempotent() {
        for name in [
            "Presentación",
            "Precio Calidad-Extra",
            "valor_x_kilo",
            "Cal. Análisis ($)",
            "",
        ] {
            let once = normalize_column_name(name);
            assert_eq!(normalize_column_name(&once), once);
        }
    }
}
