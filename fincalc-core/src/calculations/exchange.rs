//! Currency-exchange fee schedule across the bank discount tiers.

use serde::{Deserialize, Serialize};

/// Discount tier step in percent. Tiers run 0..=100 inclusive.
pub const DISCOUNT_STEP_PERCENT: u32 = 5;

/// One row of the fee schedule at a given spread-discount tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeScheduleRow {
    /// Spread discount granted by the bank, in percent.
    pub discount_percent: u32,
    /// Per-unit fee after the discount.
    pub fee: f64,
    /// Rate when buying the foreign currency: base + fee.
    pub buy_rate: f64,
    /// Rate when selling the foreign currency: base − fee.
    pub sell_rate: f64,
    /// Fee as a percentage of the base rate.
    pub fee_rate_percent: f64,
    /// Fee paid on the exchanged amount at this tier.
    pub fee_amount: f64,
}

/// Computes the fee schedule for discounts 0% through 100% in 5% steps.
///
/// Always returns exactly 21 ordered rows, both endpoints included.
///
/// # Examples
///
/// ```
/// use fincalc_core::calculations::fee_schedule;
///
/// let rows = fee_schedule(1300.0, 1.0, 10_000_000.0);
/// assert_eq!(rows.len(), 21);
/// assert_eq!(rows[0].fee, 13.0);
/// assert_eq!(rows[0].buy_rate, 1313.0);
/// assert_eq!(rows[0].sell_rate, 1287.0);
/// ```
pub fn fee_schedule(
    base_rate: f64,
    spread_percent: f64,
    exchange_amount: f64,
) -> Vec<FeeScheduleRow> {
    (0..=100)
        .step_by(DISCOUNT_STEP_PERCENT as usize)
        .map(|discount| {
            let fee = base_rate * (spread_percent / 100.0) * (1.0 - f64::from(discount) / 100.0);
            let fee_rate_percent = fee / base_rate * 100.0;
            FeeScheduleRow {
                discount_percent: discount,
                fee,
                buy_rate: base_rate + fee,
                sell_rate: base_rate - fee,
                fee_rate_percent,
                fee_amount: exchange_amount * fee_rate_percent / 100.0,
            }
        })
        .collect()
}
