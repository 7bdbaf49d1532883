//! Number normalization between raw input strings and grouped display text.
//!
//! Amount fields round-trip through these functions on every keystroke:
//! the raw string is stripped of grouping commas for parsing and regrouped
//! for display. Formatting is non-lossy: `parse_numeric(to_display(s))`
//! equals `parse_numeric(s)` for any numeric-parseable `s`.

use crate::models::RawValue;

/// Normalizes input for numeric parsing: trims whitespace and removes
/// commas (thousands separator).
fn strip_separators(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a display string into an `f64`.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty,
/// whitespace-only, or non-numeric input yields `NaN`; callers must check
/// finiteness before using the value.
///
/// # Examples
///
/// ```
/// use fincalc_core::format::parse_numeric;
///
/// assert_eq!(parse_numeric("1,234.56"), 1234.56);
/// assert!(parse_numeric("").is_nan());
/// assert!(parse_numeric("abc").is_nan());
/// ```
pub fn parse_numeric(raw: &str) -> f64 {
    let normalized = strip_separators(raw);
    if normalized.is_empty() {
        return f64::NAN;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %raw, "invalid numeric input: {}", e);
        f64::NAN
    })
}

/// Coerces a raw field value to `f64`.
///
/// Already-numeric input passes through unchanged; text goes through
/// [`parse_numeric`]; empty and date values yield `NaN` (invalid, not zero).
pub fn to_numeric(value: &RawValue) -> f64 {
    match value {
        RawValue::Empty => f64::NAN,
        RawValue::Text(s) => parse_numeric(s),
        RawValue::Number(n) => *n,
        RawValue::Date(_) => f64::NAN,
    }
}

/// Reformats a raw numeric string for display with thousands separators.
///
/// Strips any existing grouping commas, keeps only digits and the first
/// decimal point, then regroups the integer part with a comma every three
/// digits from the right. The fractional part is preserved unchanged,
/// never rounded or truncated.
///
/// # Examples
///
/// ```
/// use fincalc_core::format::to_display;
///
/// assert_eq!(to_display("1234567.891"), "1,234,567.891");
/// assert_eq!(to_display("1,2,3,4"), "1,234");
/// assert_eq!(to_display(""), "");
/// ```
pub fn to_display(raw: &str) -> String {
    let mut digits = String::new();
    let mut fraction: Option<String> = None;
    for c in raw.chars() {
        match c {
            '0'..='9' => match fraction.as_mut() {
                Some(f) => f.push(c),
                None => digits.push(c),
            },
            '.' if fraction.is_none() => fraction = Some(String::new()),
            _ => {} // grouping commas and stray characters are dropped
        }
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}
