//! Display formatting for key statistics

use campusrank_core::{CriterionKey, MetricKind};

/// Placeholder for a statistic the college has no value for
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a statistic for display
///
/// Percentages get one decimal and a `%` sign, currency a `$` sign with a
/// rounded whole-dollar amount, enrollment a rounded head count. Values for
/// unrecognized keys are printed as-is.
pub fn format_stat(key: &CriterionKey, value: f64) -> String {
    match key.metric().map(|metric| metric.kind()) {
        Some(MetricKind::Percent) => format!("{}%", format_number(value, 1)),
        Some(MetricKind::Currency) => format!("${}", format_number(value, 0)),
        Some(MetricKind::Count) => format_number(value, 0),
        None => format!("{}", value),
    }
}

/// Format an optional statistic, using [`NOT_AVAILABLE`] when absent
pub fn format_optional_stat(key: &CriterionKey, value: Option<f64>) -> String {
    match value {
        Some(v) => format_stat(key, v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Round to `decimals` places and group the integer part by thousands
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
