//! Field validation and mode gating.
//!
//! [`should_validate`] decides which fields participate in validation under
//! the current input mode; [`is_valid`] is the per-kind validity predicate.
//! Both are pure functions with no side effects and no panics.

use crate::format::to_numeric;
use crate::models::{FieldKind, InputMode, RawValue};

/// Whether a field of the given kind must be validated under `mode`.
///
/// Amount-like fields are always live. The year count participates only in
/// years mode, the date pair only in dates mode. Skipping the inactive
/// representation avoids surfacing spurious errors on inputs the user is
/// not currently using.
pub fn should_validate(kind: FieldKind, mode: InputMode) -> bool {
    match kind {
        FieldKind::Money | FieldKind::Percentage => true,
        FieldKind::YearCount => mode == InputMode::Years,
        FieldKind::Date => mode == InputMode::Dates,
    }
}

/// Whether `value` is acceptable for a field of the given kind under `mode`.
///
/// - `Money` / `Percentage`: the normalized value must be finite. No sign
///   constraint at this layer; calculators add their own bounds.
/// - `YearCount`: years mode only, and the value must parse to a whole
///   number of at least one year.
/// - `Date`: dates mode only, and the raw value must actually hold a date.
///
/// Fields outside the active mode's duration representation report valid
/// unconditionally; [`should_validate`] normally gates them out before
/// this predicate runs.
pub fn is_valid(kind: FieldKind, value: &RawValue, mode: InputMode) -> bool {
    match kind {
        FieldKind::Money | FieldKind::Percentage => to_numeric(value).is_finite(),
        FieldKind::YearCount => {
            if mode != InputMode::Years {
                return true;
            }
            let n = to_numeric(value);
            // parsed integer part must be strictly positive
            n.is_finite() && n >= 1.0
        }
        FieldKind::Date => {
            if mode != InputMode::Dates {
                return true;
            }
            value.as_date().is_some()
        }
    }
}
