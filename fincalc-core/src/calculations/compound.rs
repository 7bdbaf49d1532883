//! Compound-interest formulas: CAGR, final amount, and the growth series
//! backing the rate chart.

use serde::{Deserialize, Serialize};

/// Compound annual growth rate as a percentage.
///
/// `((final / initial)^(1/period) − 1) × 100`. A zero initial amount or a
/// non-positive ratio yields `Infinity`/`NaN`; callers surface that as
/// result-unavailable rather than displaying it.
///
/// # Examples
///
/// ```
/// use fincalc_core::calculations::annual_growth_rate;
///
/// let rate = annual_growth_rate(1_000_000.0, 1_500_000.0, 3.0);
/// assert!((rate - 14.47).abs() < 0.01);
/// ```
pub fn annual_growth_rate(initial: f64, final_amount: f64, period_years: f64) -> f64 {
    ((final_amount / initial).powf(1.0 / period_years) - 1.0) * 100.0
}

/// Final amount after compounding `initial` at `rate_percent` per year.
///
/// `initial × (1 + rate/100)^period`.
///
/// # Examples
///
/// ```
/// use fincalc_core::calculations::final_amount;
///
/// let amount = final_amount(1_000_000.0, 5.0, 3.0);
/// assert!((amount - 1_157_625.0).abs() < 1e-6);
/// ```
pub fn final_amount(initial: f64, rate_percent: f64, period_years: f64) -> f64 {
    initial * (1.0 + rate_percent / 100.0).powf(period_years)
}

/// One point of the compounded-growth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub amount: f64,
}

/// Compounded amounts for whole years `0..=years`, for the chart surface.
///
/// Year 0 is the initial amount itself; the slice has `years + 1` points.
pub fn growth_series(initial: f64, rate_percent: f64, years: u32) -> Vec<GrowthPoint> {
    (0..=years)
        .map(|year| GrowthPoint {
            year,
            amount: final_amount(initial, rate_percent, f64::from(year)),
        })
        .collect()
}
