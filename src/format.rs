//! Display Formatting
//!
//! Chilean-locale helpers for money and payment dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

/// Amount as integer pesos with es-CL thousands grouping: `10000` becomes
/// `"$10.000"`. CLP has no circulating cents, so fractional amounts round
/// to the nearest peso.
pub fn pesos(monto: f64) -> String {
    let whole = monto.round() as i64;
    format!("${}", whole.to_formatted_string(&Locale::es_CL))
}

/// Payment date as `dd-mm-yyyy`. The wire carries either an RFC 3339
/// datetime or a plain ISO date; anything unparseable is shown as-is.
pub fn fecha(valor: &str) -> String {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(valor) {
        return zoned.date_naive().format("%d-%m-%Y").to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M:%S%.f") {
        return datetime.date().format("%d-%m-%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(valor, "%Y-%m-%d") {
        return date.format("%d-%m-%Y").to_string();
    }
    valor.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pesos_groups_with_dots() {
        assert_eq!(pesos(10000.0), "$10.000");
        assert_eq!(pesos(1_250_000.0), "$1.250.000");
        assert_eq!(pesos(999.0), "$999");
        assert_eq!(pesos(0.0), "$0");
    }

    #[test]
    fn pesos_rounds_fractions() {
        assert_eq!(pesos(45990.5), "$45.991");
        assert_eq!(pesos(45990.4), "$45.990");
    }

    #[test]
    fn fecha_formats_iso_dates() {
        assert_eq!(fecha("2024-01-05"), "05-01-2024");
    }

    #[test]
    fn fecha_formats_datetimes() {
        assert_eq!(fecha("2024-01-05T23:45:00Z"), "05-01-2024");
        assert_eq!(fecha("2024-01-05T23:45:00-03:00"), "05-01-2024");
        assert_eq!(fecha("2024-01-05T23:45:00.123456"), "05-01-2024");
    }

    #[test]
    fn fecha_passes_through_garbage() {
        assert_eq!(fecha("ayer"), "ayer");
        assert_eq!(fecha(""), "");
    }
}
