//! Display formatting for nightly prices.

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "SEK" => Some("kr"),
        _ => None,
    }
}

/// Format a nightly price for display: currency symbol plus the amount rounded
/// to whole units. The underlying value is untouched; rounding is display-only.
/// An unrecognized currency code falls back to `"<CODE> <amount>"` instead of
/// failing.
pub fn format_price(amount: f64, currency: &str) -> String {
    let whole = amount.round() as i64;
    match currency_symbol(currency) {
        Some(symbol) => format!("{symbol}{whole}"),
        None => format!("{currency} {whole}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currency_uses_symbol() {
        let s = format_price(100.0, "USD");
        assert!(s.contains("100"));
        assert!(s.contains('$'));
        assert_eq!(format_price(250.0, "EUR"), "€250");
    }

    #[test]
    fn unknown_currency_falls_back_to_code() {
        assert_eq!(format_price(100.0, "XXX"), "XXX 100");
    }

    #[test]
    fn amount_is_rounded_to_whole_units() {
        assert_eq!(format_price(99.6, "USD"), "$100");
        assert_eq!(format_price(99.4, "USD"), "$99");
        assert_eq!(format_price(99.4, "ZZZ"), "ZZZ 99");
    }
}
