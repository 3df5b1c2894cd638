/// Formatea un precio en dólares con dos decimales.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Fecha corta para tablas del admin; el backend manda RFC 3339 o nada.
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        Some(value) => match chrono::DateTime::parse_from_rfc3339(value) {
            Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
            Err(_) => value.to_string(),
        },
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_always_two_decimals() {
        assert_eq!(format_price(199.9), "$199.90");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn date_falls_back_to_raw_value() {
        assert_eq!(format_date(Some("2024-11-10T08:30:00+00:00")), "2024-11-10");
        assert_eq!(format_date(Some("ayer")), "ayer");
        assert_eq!(format_date(None), "—");
    }
}
