//! Jeonse ↔ monthly-rent conversion (Korean annualized convention).
//!
//! All amounts are in 만원; the conversion rate is an annual percentage,
//! hence the 1200 (12 months × 100) in every formula. Each direction
//! returns `None` when its denominator (or the deposit difference) is not
//! positive; the derived field is left blank, never shown as an error or
//! as `Infinity`.

/// Annualizing constant: 12 months × 100 (percent).
const MONTHS_TIMES_PERCENT: f64 = 1200.0;

/// Monthly rent from jeonse deposit, monthly deposit, and conversion rate:
/// `(jeonse − monthly) × rate / 1200`, rounded to a whole 만원.
///
/// # Examples
///
/// ```
/// use fincalc_core::calculations::rent::monthly_rent;
///
/// assert_eq!(monthly_rent(30_000.0, 5_000.0, 6.0), Some(125.0));
/// assert_eq!(monthly_rent(5_000.0, 5_000.0, 6.0), None);
/// ```
pub fn monthly_rent(jeonse_deposit: f64, monthly_deposit: f64, rate_percent: f64) -> Option<f64> {
    let converted = jeonse_deposit - monthly_deposit;
    if converted <= 0.0 {
        return None;
    }
    Some((converted * rate_percent / MONTHS_TIMES_PERCENT).round())
}

/// Jeonse deposit from monthly deposit, monthly rent, and conversion rate:
/// `monthly + rent × 1200 / rate`, rounded to a whole 만원.
///
/// `None` when the rate is not positive.
pub fn jeonse_deposit(monthly_deposit: f64, monthly_rent: f64, rate_percent: f64) -> Option<f64> {
    if rate_percent <= 0.0 {
        return None;
    }
    Some((monthly_deposit + monthly_rent * MONTHS_TIMES_PERCENT / rate_percent).round())
}

/// Conversion rate from jeonse deposit, monthly deposit, and monthly rent:
/// `rent × 1200 / (jeonse − monthly)`, as a percentage with two decimals.
///
/// `None` when the deposit difference is not positive.
pub fn conversion_rate(
    jeonse_deposit: f64,
    monthly_deposit: f64,
    monthly_rent: f64,
) -> Option<f64> {
    let converted = jeonse_deposit - monthly_deposit;
    if converted <= 0.0 {
        return None;
    }
    Some(super::common::round_dp2(
        monthly_rent * MONTHS_TIMES_PERCENT / converted,
    ))
}
