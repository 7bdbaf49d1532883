//! 최종 금액 계산기: final amount from an initial amount compounded at an
//! annual rate over a year count or date range.

use serde::{Deserialize, Serialize};

use fincalc_core::calculations::final_amount;
use fincalc_core::format::to_display;
use fincalc_core::{FieldKind, FieldSpec, InputMode, resolve_period_years};

use crate::form::{Calculator, ComputeError, FieldValues};
use crate::messages;

pub const INITIAL_AMOUNT: &str = "initial_amount";
pub const INTEREST_RATE: &str = "interest_rate";
pub const YEARS: &str = "years";
pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(INITIAL_AMOUNT, FieldKind::Money),
    FieldSpec::new(INTEREST_RATE, FieldKind::Percentage),
    FieldSpec::new(YEARS, FieldKind::YearCount),
    FieldSpec::new(START_DATE, FieldKind::Date),
    FieldSpec::new(END_DATE, FieldKind::Date),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAmountResult {
    /// Compounded final amount in 원, before display rounding.
    pub amount: f64,
    /// Result-panel text with the amount grouped and rounded to whole 원,
    /// e.g. `최종 금액: 1,157,625원`.
    pub summary: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FinalAmountCalculator;

impl Calculator for FinalAmountCalculator {
    type Output = FinalAmountResult;

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(
        &self,
        mode: InputMode,
        values: FieldValues<'_>,
    ) -> Result<Self::Output, ComputeError> {
        let period = resolve_period_years(
            mode,
            values.year_count(YEARS),
            values.date(START_DATE),
            values.date(END_DATE),
        )
        .map_err(|_| ComputeError::Notice(messages::SELECT_DATES.to_string()))?;

        let (initial, rate_percent) = match (
            values.finite(INITIAL_AMOUNT),
            values.finite(INTEREST_RATE),
        ) {
            (Some(initial), Some(rate)) => (initial, rate),
            _ => {
                return Err(ComputeError::Notice(
                    messages::ENTER_INITIAL_AND_RATE.to_string(),
                ));
            }
        };

        let amount = final_amount(initial, rate_percent, period);
        if !amount.is_finite() {
            return Err(ComputeError::Notice(
                messages::RESULT_UNAVAILABLE.to_string(),
            ));
        }

        Ok(FinalAmountResult {
            amount,
            summary: format!("최종 금액: {}원", to_display(&format!("{amount:.0}"))),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use fincalc_core::RawValue;

    use super::*;
    use crate::form::{FormOrchestrator, SubmitStatus};

    #[test]
    fn one_million_at_five_percent_for_three_years() {
        let mut form = FormOrchestrator::new(FinalAmountCalculator);
        form.edit(INITIAL_AMOUNT, RawValue::text("1,000,000"));
        form.edit(INTEREST_RATE, RawValue::Number(5.0));
        form.edit(YEARS, RawValue::Number(3.0));
        assert_eq!(form.submit(), SubmitStatus::Completed);
        let result = form.result().unwrap();
        assert_eq!(result.summary, "최종 금액: 1,157,625원");
        assert!((result.amount - 1_157_625.0).abs() < 1e-6);
    }

    #[test]
    fn date_range_shorter_than_a_year_compounds_fractionally() {
        let mut form = FormOrchestrator::new(FinalAmountCalculator);
        form.edit(INITIAL_AMOUNT, RawValue::Number(1_000_000.0));
        form.edit(INTEREST_RATE, RawValue::Number(10.0));
        form.set_mode(InputMode::Dates);
        form.edit(
            START_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
        );
        form.edit(
            END_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()),
        );
        assert_eq!(form.submit(), SubmitStatus::Completed);
        let expected = 1_000_000.0 * 1.1_f64.powf(181.0 / 365.0);
        assert!((form.result().unwrap().amount - expected).abs() < 1e-6);
    }

    #[test]
    fn untouched_rate_field_rejects_the_submit() {
        let mut form = FormOrchestrator::new(FinalAmountCalculator);
        form.edit(INITIAL_AMOUNT, RawValue::Number(1_000_000.0));
        form.edit(YEARS, RawValue::Number(3.0));
        assert_eq!(form.submit(), SubmitStatus::Rejected);
        assert_eq!(form.error(INTEREST_RATE), Some(messages::INVALID_INPUT));
        assert_eq!(form.result(), None);
    }
}
