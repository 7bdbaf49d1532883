//! Duration resolution: year count or date pair into fractional years.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::InputMode;

/// Fixed days-per-year divisor for date-based durations.
///
/// The calculators use a flat 365-day year with no leap-year adjustment;
/// 365.25 was considered and rejected to keep results byte-identical with
/// the year-count path for whole non-leap years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Failure to resolve a duration from the active representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Dates mode with at least one date missing.
    #[error("start and end dates are required")]
    MissingDates,

    /// Years mode with no year count selected.
    #[error("a year count is required")]
    MissingYearCount,
}

/// Resolves the active duration representation into fractional years.
///
/// Years mode takes the year count as-is (already validated positive).
/// Dates mode divides the whole-day difference by [`DAYS_PER_YEAR`]; the
/// result is negative when `end` precedes `start`. Date ordering is a
/// form-level refinement, not enforced here.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fincalc_core::{InputMode, resolve_period_years};
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1);
/// let end = NaiveDate::from_ymd_opt(2021, 1, 1);
/// let period = resolve_period_years(InputMode::Dates, None, start, end).unwrap();
/// assert!((period - 366.0 / 365.0).abs() < 1e-12);
/// ```
pub fn resolve_period_years(
    mode: InputMode,
    years: Option<u32>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<f64, PeriodError> {
    match mode {
        InputMode::Years => years
            .map(f64::from)
            .ok_or(PeriodError::MissingYearCount),
        InputMode::Dates => match (start, end) {
            (Some(start), Some(end)) => {
                let days = (end - start).num_days() as f64;
                Ok(days / DAYS_PER_YEAR)
            }
            _ => Err(PeriodError::MissingDates),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn years_mode_passes_count_through() {
        let period = resolve_period_years(InputMode::Years, Some(7), None, None).unwrap();
        assert_eq!(period, 7.0);
    }

    #[test]
    fn years_mode_without_count_fails() {
        let result = resolve_period_years(InputMode::Years, None, None, None);
        assert_eq!(result, Err(PeriodError::MissingYearCount));
    }

    #[test]
    fn dates_mode_divides_whole_days_by_365() {
        let period = resolve_period_years(
            InputMode::Dates,
            None,
            date(2021, 1, 1),
            date(2024, 1, 1),
        )
        .unwrap();
        // 1095 days across 2021-2023, none of them leap years
        assert_eq!(period, 1095.0 / 365.0);
        assert_eq!(period, 3.0);
    }

    #[test]
    fn dates_mode_ignores_stale_year_count() {
        let period = resolve_period_years(
            InputMode::Dates,
            Some(40),
            date(2023, 1, 1),
            date(2023, 7, 1),
        )
        .unwrap();
        assert_eq!(period, 181.0 / 365.0);
    }

    #[test]
    fn dates_mode_with_missing_date_fails() {
        for (start, end) in [(None, date(2024, 1, 1)), (date(2024, 1, 1), None), (None, None)] {
            let result = resolve_period_years(InputMode::Dates, None, start, end);
            assert_eq!(result, Err(PeriodError::MissingDates));
        }
    }

    #[test]
    fn reversed_dates_yield_negative_period() {
        let period = resolve_period_years(
            InputMode::Dates,
            None,
            date(2024, 1, 1),
            date(2023, 1, 1),
        )
        .unwrap();
        assert!(period < 0.0);
    }
}
