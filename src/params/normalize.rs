//! Text normalization for user-entered amounts, rates and durations
//!
//! Every function returns `None` for empty or unparseable text instead of
//! failing, so "not entered yet" stays distinguishable from an explicit 0.

/// Currency sign stripped from amount fields
pub const CURRENCY_SIGN: char = '₫';

/// Parse a monetary amount such as `"100.000.000 ₫"`
///
/// `.` is the thousands separator here, so it is removed together with the
/// currency sign and any whitespace.
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '.' && *c != CURRENCY_SIGN && !c.is_whitespace())
        .collect();
    parse_finite(&cleaned)
}

/// Parse an annual rate such as `"7,2 %"` or `"7.2%"`
pub fn normalize_rate(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '%' && !c.is_whitespace())
        .collect();
    parse_finite(&cleaned.replacen(',', ".", 1))
}

/// Parse a year count; `,` is accepted as decimal separator
///
/// Fractional values parse here and are rejected later by the readiness gate.
pub fn normalize_years(raw: &str) -> Option<f64> {
    parse_finite(&raw.trim().replacen(',', ".", 1))
}

fn parse_finite(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
