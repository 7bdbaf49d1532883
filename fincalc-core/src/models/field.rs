use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The validation class a form field belongs to.
///
/// The original screens dispatched validation by switching on field-name
/// strings; here every field declares its kind up front and each kind has
/// exactly one validation rule, matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// A currency amount, displayed with thousands separators and a
    /// 원/만원 suffix. Non-negative by convention, not enforced here.
    Money,
    /// A percentage expressed as a percent (5 means 5%), not a fraction.
    Percentage,
    /// A positive whole number of years; live only in [`InputMode::Years`].
    ///
    /// [`InputMode::Years`]: crate::InputMode::Years
    YearCount,
    /// A calendar date with no time-of-day significance; used only in
    /// start/end pairs and live only in [`InputMode::Dates`].
    ///
    /// [`InputMode::Dates`]: crate::InputMode::Dates
    Date,
}

/// Raw field content exactly as the rendering surface delivers it.
///
/// `Empty` stands in for null/undefined input and normalizes to `NaN`
/// (invalid, not zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl RawValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The date payload, if this value holds one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for RawValue {
    fn default() -> Self {
        Self::Empty
    }
}

/// One field of a calculator form: a stable name plus its validation kind.
///
/// A calculator's schema is a static slice of these; the orchestrator keys
/// its value and error maps by `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}
