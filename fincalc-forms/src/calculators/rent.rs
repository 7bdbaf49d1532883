//! 전월세 전환 계산기: the three directions of the jeonse ↔ monthly-rent
//! conversion. Unlike the submit-style calculators these re-derive their
//! result on every clean edit, and an unavailable conversion leaves the
//! derived field blank rather than showing an error.

use fincalc_core::calculations::rent;
use fincalc_core::format::{to_display, to_numeric};
use fincalc_core::{FieldKind, FieldSpec, InputMode, RawValue};

use crate::form::{Calculator, ComputeError, FieldValues};
use crate::messages;

pub const JEONSE_DEPOSIT: &str = "jeonse_deposit";
pub const MONTHLY_DEPOSIT: &str = "monthly_deposit";
pub const MONTHLY_RENT: &str = "monthly_rent";
pub const CONVERSION_RATE: &str = "conversion_rate";

/// Shared bound checks for the rent forms. An empty field is not an error,
/// it just leaves the conversion blank.
fn refine_rent_field(
    field: &'static str,
    value: &RawValue,
    values: FieldValues<'_>,
) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let n = to_numeric(value);
    if !n.is_finite() {
        return Some(messages::INVALID_INPUT.to_string());
    }
    if n < 0.0 {
        return Some(messages::NEGATIVE_NOT_ALLOWED.to_string());
    }
    if field == CONVERSION_RATE && n > 100.0 {
        return Some(messages::RATE_OVER_100.to_string());
    }
    if field == MONTHLY_DEPOSIT {
        if let Some(jeonse) = values.finite(JEONSE_DEPOSIT) {
            if n > jeonse {
                return Some(messages::DEPOSIT_EXCEEDS_JEONSE.to_string());
            }
        }
    }
    None
}

/// Formats a derived amount (만원) for the read-only display field.
fn display_amount(value: f64) -> String {
    to_display(&format!("{value:.0}"))
}

/// 전세 → 월세: derives the monthly rent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JeonseToMonthlyCalculator;

impl Calculator for JeonseToMonthlyCalculator {
    type Output = String;

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new(JEONSE_DEPOSIT, FieldKind::Money),
            FieldSpec::new(MONTHLY_DEPOSIT, FieldKind::Money),
            FieldSpec::new(CONVERSION_RATE, FieldKind::Percentage),
        ];
        FIELDS
    }

    fn refine(
        &self,
        field: &'static str,
        value: &RawValue,
        values: FieldValues<'_>,
    ) -> Option<String> {
        refine_rent_field(field, value, values)
    }

    fn recompute_on_edit(&self) -> bool {
        true
    }

    fn compute(
        &self,
        _mode: InputMode,
        values: FieldValues<'_>,
    ) -> Result<Self::Output, ComputeError> {
        let (jeonse, deposit, rate) = match (
            values.finite(JEONSE_DEPOSIT),
            values.finite(MONTHLY_DEPOSIT),
            values.finite(CONVERSION_RATE),
        ) {
            (Some(j), Some(d), Some(r)) => (j, d, r),
            _ => return Err(ComputeError::Unavailable),
        };
        rent::monthly_rent(jeonse, deposit, rate)
            .map(display_amount)
            .ok_or(ComputeError::Unavailable)
    }
}

/// 월세 → 전세: derives the jeonse deposit.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyToJeonseCalculator;

impl Calculator for MonthlyToJeonseCalculator {
    type Output = String;

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new(MONTHLY_RENT, FieldKind::Money),
            FieldSpec::new(MONTHLY_DEPOSIT, FieldKind::Money),
            FieldSpec::new(CONVERSION_RATE, FieldKind::Percentage),
        ];
        FIELDS
    }

    fn refine(
        &self,
        field: &'static str,
        value: &RawValue,
        values: FieldValues<'_>,
    ) -> Option<String> {
        refine_rent_field(field, value, values)
    }

    fn recompute_on_edit(&self) -> bool {
        true
    }

    fn compute(
        &self,
        _mode: InputMode,
        values: FieldValues<'_>,
    ) -> Result<Self::Output, ComputeError> {
        let (rent_amount, deposit, rate) = match (
            values.finite(MONTHLY_RENT),
            values.finite(MONTHLY_DEPOSIT),
            values.finite(CONVERSION_RATE),
        ) {
            (Some(r), Some(d), Some(c)) => (r, d, c),
            _ => return Err(ComputeError::Unavailable),
        };
        rent::jeonse_deposit(deposit, rent_amount, rate)
            .map(display_amount)
            .ok_or(ComputeError::Unavailable)
    }
}

/// 전환율: derives the conversion rate from both deposits and the rent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionRateCalculator;

impl Calculator for ConversionRateCalculator {
    type Output = String;

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new(JEONSE_DEPOSIT, FieldKind::Money),
            FieldSpec::new(MONTHLY_DEPOSIT, FieldKind::Money),
            FieldSpec::new(MONTHLY_RENT, FieldKind::Money),
        ];
        FIELDS
    }

    fn refine(
        &self,
        field: &'static str,
        value: &RawValue,
        values: FieldValues<'_>,
    ) -> Option<String> {
        refine_rent_field(field, value, values)
    }

    fn recompute_on_edit(&self) -> bool {
        true
    }

    fn compute(
        &self,
        _mode: InputMode,
        values: FieldValues<'_>,
    ) -> Result<Self::Output, ComputeError> {
        let (jeonse, deposit, rent_amount) = match (
            values.finite(JEONSE_DEPOSIT),
            values.finite(MONTHLY_DEPOSIT),
            values.finite(MONTHLY_RENT),
        ) {
            (Some(j), Some(d), Some(r)) => (j, d, r),
            _ => return Err(ComputeError::Unavailable),
        };
        // trailing zeros are not shown: 6 rather than 6.00
        rent::conversion_rate(jeonse, deposit, rent_amount)
            .map(|rate| format!("{rate}%"))
            .ok_or(ComputeError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::FormOrchestrator;

    #[test]
    fn monthly_rent_derives_on_every_clean_edit() {
        let mut form = FormOrchestrator::new(JeonseToMonthlyCalculator);
        form.edit(JEONSE_DEPOSIT, RawValue::text("30,000"));
        assert_eq!(form.result(), None); // inputs incomplete, stays blank
        form.edit(MONTHLY_DEPOSIT, RawValue::text("5,000"));
        form.edit(CONVERSION_RATE, RawValue::Number(6.0));
        assert_eq!(form.result(), Some(&"125".to_string()));
    }

    #[test]
    fn jeonse_deposit_derives_from_rent_and_rate() {
        let mut form = FormOrchestrator::new(MonthlyToJeonseCalculator);
        form.edit(MONTHLY_RENT, RawValue::Number(100.0));
        form.edit(MONTHLY_DEPOSIT, RawValue::text("5,000"));
        form.edit(CONVERSION_RATE, RawValue::Number(6.0));
        assert_eq!(form.result(), Some(&"25,000".to_string()));
    }

    #[test]
    fn conversion_rate_derives_with_trimmed_decimals() {
        let mut form = FormOrchestrator::new(ConversionRateCalculator);
        form.edit(JEONSE_DEPOSIT, RawValue::text("30,000"));
        form.edit(MONTHLY_DEPOSIT, RawValue::text("5,000"));
        form.edit(MONTHLY_RENT, RawValue::Number(125.0));
        assert_eq!(form.result(), Some(&"6%".to_string()));
    }

    #[test]
    fn equal_deposits_blank_the_result_instead_of_showing_infinity() {
        let mut form = FormOrchestrator::new(ConversionRateCalculator);
        form.edit(JEONSE_DEPOSIT, RawValue::text("5,000"));
        form.edit(MONTHLY_DEPOSIT, RawValue::text("5,000"));
        form.edit(MONTHLY_RENT, RawValue::Number(100.0));
        assert_eq!(form.result(), None);
        assert_eq!(form.notice(), None);
        assert!(!form.has_errors());
    }

    #[test]
    fn negative_amount_is_a_field_error_and_stops_derivation() {
        let mut form = FormOrchestrator::new(JeonseToMonthlyCalculator);
        form.edit(JEONSE_DEPOSIT, RawValue::Number(-1.0));
        assert_eq!(
            form.error(JEONSE_DEPOSIT),
            Some(messages::NEGATIVE_NOT_ALLOWED)
        );
        assert_eq!(form.result(), None);
    }

    #[test]
    fn conversion_rate_above_100_is_rejected() {
        let mut form = FormOrchestrator::new(MonthlyToJeonseCalculator);
        form.edit(CONVERSION_RATE, RawValue::Number(120.0));
        assert_eq!(form.error(CONVERSION_RATE), Some(messages::RATE_OVER_100));
    }

    #[test]
    fn monthly_deposit_may_not_exceed_jeonse_deposit() {
        let mut form = FormOrchestrator::new(JeonseToMonthlyCalculator);
        form.edit(JEONSE_DEPOSIT, RawValue::text("10,000"));
        form.edit(MONTHLY_DEPOSIT, RawValue::text("20,000"));
        assert_eq!(
            form.error(MONTHLY_DEPOSIT),
            Some(messages::DEPOSIT_EXCEEDS_JEONSE)
        );
    }

    #[test]
    fn emptying_a_field_blanks_the_derived_result() {
        let mut form = FormOrchestrator::new(JeonseToMonthlyCalculator);
        form.edit(JEONSE_DEPOSIT, RawValue::text("30,000"));
        form.edit(MONTHLY_DEPOSIT, RawValue::text("5,000"));
        form.edit(CONVERSION_RATE, RawValue::Number(6.0));
        assert_eq!(form.result(), Some(&"125".to_string()));

        form.edit(CONVERSION_RATE, RawValue::Empty);
        assert_eq!(form.result(), None);
    }

    #[test]
    fn half_value_rent_rounds_to_whole_manwon() {
        let mut form = FormOrchestrator::new(JeonseToMonthlyCalculator);
        form.edit(JEONSE_DEPOSIT, RawValue::text("20,000"));
        form.edit(MONTHLY_DEPOSIT, RawValue::text("10,000"));
        form.edit(CONVERSION_RATE, RawValue::Number(4.5));
        assert_eq!(form.result(), Some(&"38".to_string()));
    }
}
