//! Presentation helpers for amounts, rates and chart axes
//!
//! Follows the vi-VN conventions of the calculator UI: `.` groups
//! thousands, `,` marks decimals, and amounts carry a trailing `₫`.
//! The projection engine never calls into this module.

use crate::params::normalize::CURRENCY_SIGN;
use crate::projection::ProjectionResult;

/// Turns an amount into display text
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: f64) -> String;
}

/// Vietnamese dong, whole units: `1.234.567 ₫`
#[derive(Debug, Clone, Copy, Default)]
pub struct VndFormatter;

impl CurrencyFormatter for VndFormatter {
    fn format_currency(&self, amount: f64) -> String {
        format!("{} {}", group_number(amount, 0), CURRENCY_SIGN)
    }
}

/// Amount as shown back inside an input field; empty when absent or zero
pub fn format_amount_input(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format!("{} {}", group_number(v, 3), CURRENCY_SIGN),
        _ => String::new(),
    }
}

/// Rate as shown inside its input field, e.g. `7.2 %`
pub fn format_rate_input(value: Option<f64>) -> String {
    value.map(|v| format!("{} %", v)).unwrap_or_default()
}

/// Short y-axis label in billions (tỷ) or millions (triệu)
pub fn format_axis_label(value: f64) -> String {
    if value == 0.0 {
        format!("0 {}", CURRENCY_SIGN)
    } else if value >= 1_000_000_000.0 {
        format!("{:.1} tỷ", value / 1_000_000_000.0)
    } else {
        format!("{:.1} triệu", value / 1_000_000.0)
    }
}

/// Yearly table: year, contributions, interest, future value
pub fn breakdown_table<F: CurrencyFormatter>(result: &ProjectionResult, formatter: &F) -> String {
    let mut out = format!(
        "{:>5} {:>24} {:>24} {:>24}\n",
        "Year", "Contributions", "Interest", "Future value"
    );
    out.push_str(&"-".repeat(80));
    out.push('\n');

    for entry in &result.yearly_breakdown {
        out.push_str(&format!(
            "{:>5} {:>24} {:>24} {:>24}\n",
            entry.year,
            formatter.format_currency(entry.total_contributions),
            formatter.format_currency(entry.interest_earned),
            formatter.format_currency(entry.future_value),
        ));
    }
    out
}

/// Group the integer part with `.` and keep up to `max_fraction` decimals after `,`
fn group_number(value: f64, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, frac_part)
    }
}
