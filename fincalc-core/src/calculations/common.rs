//! Shared helpers for calculation display: rounding and finiteness checks.

/// Rounds to two decimal places, half away from zero.
///
/// This is the rounding the display formulas use for percentage rates.
///
/// # Examples
///
/// ```
/// use fincalc_core::calculations::round_dp2;
///
/// assert_eq!(round_dp2(14.4714), 14.47);
/// assert_eq!(round_dp2(14.475), 14.48);
/// ```
pub fn round_dp2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Post-hoc degenerate-arithmetic check: `Some(value)` only when finite.
///
/// Division by zero and roots of negative bases surface as `NaN` or
/// `±Infinity`; those must be reported as result-unavailable, never
/// displayed as numbers.
pub fn displayable(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_dp2_rounds_half_away_from_zero() {
        assert_eq!(round_dp2(14.4714), 14.47);
        assert_eq!(round_dp2(14.475), 14.48);
        assert_eq!(round_dp2(-14.475), -14.48);
    }

    #[test]
    fn round_dp2_preserves_already_rounded_values() {
        assert_eq!(round_dp2(6.0), 6.0);
        assert_eq!(round_dp2(4.5), 4.5);
    }

    #[test]
    fn displayable_rejects_non_finite_values() {
        assert_eq!(displayable(125.0), Some(125.0));
        assert_eq!(displayable(f64::NAN), None);
        assert_eq!(displayable(f64::INFINITY), None);
        assert_eq!(displayable(f64::NEG_INFINITY), None);
    }
}
