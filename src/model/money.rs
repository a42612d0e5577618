//! Money and percentage formatting shared by cards, tooltips and tables

/// Currency codes with a dedicated symbol
const SYMBOLS: &[(&str, &str)] = &[("CNY", "¥")];

/// Symbol used for any code without an entry
pub const GENERIC_SYMBOL: &str = "$";

/// Look up the symbol for a currency code
pub fn currency_symbol(code: &str) -> &'static str {
    SYMBOLS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, symbol)| *symbol)
        .unwrap_or(GENERIC_SYMBOL)
}

/// Reverse lookup: the code for a dedicated symbol
pub fn currency_code(symbol: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(_, s)| *s == symbol)
        .map(|(code, _)| *code)
}

/// Insert thousands separators into a run of ASCII digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Locale style number: grouped integer part, at most two fraction digits,
/// trailing zeros trimmed
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = String::new();
    if value < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole.to_string()));
    if frac != 0 {
        let frac = format!("{:02}", frac);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Format a monetary value with the symbol for `code`
///
/// The sign of negative values goes before the symbol: `-$12.5`.
pub fn format_money(value: f64, code: &str) -> String {
    let number = format_number(value);
    let symbol = currency_symbol(code);
    match number.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, number),
    }
}

/// Short form for axis labels: `$1.2M`, `$850K`
pub fn format_compact(value: f64, code: &str) -> String {
    let symbol = currency_symbol(code);
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    // Pick the unit after rounding
    let units = abs.round();
    let thousands = (abs / 1_000.0).round();
    let body = if units < 1_000.0 {
        format!("{}", units)
    } else if thousands < 1_000.0 {
        format!("{}K", thousands)
    } else {
        format!("{:.1}M", abs / 1_000_000.0)
    };

    format!("{}{}{}", sign, symbol, body)
}

/// Signed percentage with one decimal: `+4.2%`
pub fn format_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_symbol_lookup() {
        assert_eq!(currency_symbol("CNY"), "¥");
        assert_eq!(currency_symbol("cny"), "¥");
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("XYZ"), GENERIC_SYMBOL);
        assert_eq!(currency_code("¥"), Some("CNY"));
        assert_eq!(currency_code("€"), None);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1200.5, "USD"), "$1,200.5");
        assert_eq!(format_money(1200.5, "CNY"), "¥1,200.5");
        assert_eq!(format_money(1234567.891, "USD"), "$1,234,567.89");
        assert_eq!(format_money(0.0, "USD"), "$0");
        assert_eq!(format_money(999.0, "EUR"), "$999");
        assert_eq!(format_money(-12.5, "USD"), "-$12.5");
    }

    #[test]
    fn test_format_number_rounding() {
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(100.05), "100.05");
        assert_eq!(format_number(0.001), "0");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(f64::NAN), "-");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(1_340_000.0, "USD"), "$1.3M");
        assert_eq!(format_compact(850_000.0, "CNY"), "¥850K");
        assert_eq!(format_compact(-420.0, "USD"), "-$420");
        assert_eq!(format_compact(999_999.0, "USD"), "$1.0M");
        assert_eq!(format_compact(999.6, "USD"), "$1K");
        assert_eq!(format_compact(999_400.0, "USD"), "$999K");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(4.26), "+4.3%");
        assert_eq!(format_percent(-1.0), "-1.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
