//! 연복리 환산 계산기: compound annual growth rate from an initial and a
//! final amount over a duration given as a year count or a date range.

use serde::{Deserialize, Serialize};

use fincalc_core::calculations::{GrowthPoint, annual_growth_rate, growth_series, round_dp2};
use fincalc_core::{FieldKind, FieldSpec, InputMode, resolve_period_years};

use crate::form::{Calculator, ComputeError, FieldValues};
use crate::messages;

pub const INITIAL_AMOUNT: &str = "initial_amount";
pub const FINAL_AMOUNT: &str = "final_amount";
pub const YEARS: &str = "years";
pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(INITIAL_AMOUNT, FieldKind::Money),
    FieldSpec::new(FINAL_AMOUNT, FieldKind::Money),
    FieldSpec::new(YEARS, FieldKind::YearCount),
    FieldSpec::new(START_DATE, FieldKind::Date),
    FieldSpec::new(END_DATE, FieldKind::Date),
];

/// Years plotted by the rate chart (plus year zero).
const CHART_YEARS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRateResult {
    /// CAGR as a percentage, two decimals.
    pub rate_percent: f64,
    /// Result-panel text, e.g. `연복리 수익률(CAGR): 14.47%`.
    pub summary: String,
    /// Compounded growth of the initial amount at the computed rate, for
    /// the chart modal.
    pub series: Vec<GrowthPoint>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnnualRateCalculator;

impl Calculator for AnnualRateCalculator {
    type Output = AnnualRateResult;

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

        let (initial, final_amount) = match (
            values.finite(INITIAL_AMOUNT),
            values.finite(FINAL_AMOUNT),
        ) {
            (Some(initial), Some(final_amount)) => (initial, final_amount),
            _ => {
                return Err(ComputeError::Notice(
                    messages::ENTER_INITIAL_AND_FINAL.to_string(),
                ));
            }
        };

        let rate = annual_growth_rate(initial, final_amount, period);
        if !rate.is_finite() {
            // zero initial amount, negative ratio, zero-day date range
            return Err(ComputeError::Notice(
                messages::RESULT_UNAVAILABLE.to_string(),
            ));
        }

        let rate_percent = round_dp2(rate);
        Ok(AnnualRateResult {
            rate_percent,
            summary: format!("연복리 수익률(CAGR): {rate_percent:.2}%"),
            series: growth_series(initial, rate, CHART_YEARS),
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

    fn filled_form() -> FormOrchestrator<AnnualRateCalculator> {
        let mut form = FormOrchestrator::new(AnnualRateCalculator);
        form.edit(INITIAL_AMOUNT, RawValue::text("1,000,000"));
        form.edit(FINAL_AMOUNT, RawValue::text("1,500,000"));
        form.edit(YEARS, RawValue::Number(3.0));
        form
    }

    #[test]
    fn fifty_percent_over_three_years_is_14_47() {
        let mut form = filled_form();
        assert_eq!(form.submit(), SubmitStatus::Completed);
        let result = form.result().unwrap();
        assert_eq!(result.rate_percent, 14.47);
        assert_eq!(result.summary, "연복리 수익률(CAGR): 14.47%");
    }

    #[test]
    fn chart_series_spans_year_zero_to_thirty() {
        let mut form = filled_form();
        form.submit();
        let series = &form.result().unwrap().series;
        assert_eq!(series.len(), 31);
        assert_eq!(series[0].amount, 1_000_000.0);
        // the unrounded rate reproduces the final amount at year three
        assert!((series[3].amount - 1_500_000.0).abs() < 1e-3);
    }

    #[test]
    fn date_range_drives_the_period_in_dates_mode() {
        let mut form = filled_form();
        form.set_mode(InputMode::Dates);
        form.edit(
            START_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
        );
        form.edit(
            END_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        );
        assert_eq!(form.submit(), SubmitStatus::Completed);
        // 1095 days / 365 = exactly 3 years
        assert_eq!(form.result().unwrap().rate_percent, 14.47);
    }

    #[test]
    fn cleared_date_is_caught_by_submit_even_after_order_check_wipes_it() {
        let mut form = filled_form();
        form.set_mode(InputMode::Dates);
        form.edit(
            START_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        );
        form.edit(END_DATE, RawValue::Empty);
        // the ordering check needs both dates and clears the pair's errors,
        // so the empty end date shows no inline error yet
        assert_eq!(form.error(END_DATE), None);
        // the full submit pass still rejects it
        assert_eq!(form.submit(), SubmitStatus::Rejected);
        assert_eq!(form.error(END_DATE), Some(messages::INVALID_INPUT));
    }

    #[test]
    fn zero_initial_amount_reports_result_unavailable() {
        let mut form = filled_form();
        form.edit(INITIAL_AMOUNT, RawValue::Number(0.0));
        assert_eq!(form.submit(), SubmitStatus::Unavailable);
        assert_eq!(form.result(), None);
        assert_eq!(form.notice(), Some(messages::RESULT_UNAVAILABLE));
    }

    #[test]
    fn reversed_dates_flag_both_date_fields_on_edit() {
        let mut form = filled_form();
        form.set_mode(InputMode::Dates);
        form.edit(
            START_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        );
        form.edit(
            END_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        );
        assert_eq!(form.error(START_DATE), Some(messages::START_AFTER_END));
        assert_eq!(form.error(END_DATE), Some(messages::END_BEFORE_START));
    }

    #[test]
    fn stale_year_count_does_not_leak_into_dates_mode() {
        let mut form = filled_form();
        form.edit(YEARS, RawValue::Number(40.0));
        form.set_mode(InputMode::Dates);
        form.edit(
            START_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
        );
        form.edit(
            END_DATE,
            RawValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        );
        assert_eq!(form.submit(), SubmitStatus::Completed);
        // one 365-day year, not forty
        let rate = form.result().unwrap().rate_percent;
        assert_eq!(rate, 50.0);
    }
}
