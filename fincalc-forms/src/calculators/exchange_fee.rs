//! 환전 수수료 계산기: fee schedule across the spread-discount tiers for
//! a base exchange rate and trade amount.

use fincalc_core::calculations::{FeeScheduleRow, fee_schedule};
use fincalc_core::{FieldKind, FieldSpec, InputMode};

use crate::form::{Calculator, ComputeError, FieldValues};
use crate::messages;

pub const TRADE_BASE_AMOUNT: &str = "trade_base_amount";
pub const EXCHANGE_SPREAD: &str = "exchange_spread";
pub const EXCHANGE_AMOUNT: &str = "exchange_amount";

// no duration fields: every field is live in either mode
const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(TRADE_BASE_AMOUNT, FieldKind::Money),
    FieldSpec::new(EXCHANGE_SPREAD, FieldKind::Percentage),
    FieldSpec::new(EXCHANGE_AMOUNT, FieldKind::Money),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeFeeCalculator;

impl Calculator for ExchangeFeeCalculator {
    type Output = Vec<FeeScheduleRow>;

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(
        &self,
        _mode: InputMode,
        values: FieldValues<'_>,
    ) -> Result<Self::Output, ComputeError> {
        let (base, spread, amount) = match (
            values.finite(TRADE_BASE_AMOUNT),
            values.finite(EXCHANGE_SPREAD),
            values.finite(EXCHANGE_AMOUNT),
        ) {
            (Some(base), Some(spread), Some(amount)) => (base, spread, amount),
            _ => return Err(ComputeError::Unavailable),
        };

        let rows = fee_schedule(base, spread, amount);
        // a zero base rate divides by zero in the fee-rate column
        let degenerate = rows.iter().any(|row| {
            !(row.fee.is_finite()
                && row.buy_rate.is_finite()
                && row.sell_rate.is_finite()
                && row.fee_rate_percent.is_finite()
                && row.fee_amount.is_finite())
        });
        if degenerate {
            return Err(ComputeError::Notice(
                messages::RESULT_UNAVAILABLE.to_string(),
            ));
        }
        Ok(rows)
    }
}
