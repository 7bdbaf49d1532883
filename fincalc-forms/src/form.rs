//! The form orchestrator: one instance of field state, error state, and
//! result state per on-screen calculator.
//!
//! Every edit, mode change, and submit is a complete synchronous state
//! transition. Submission is atomic: it either updates the error map or
//! replaces the result wholesale; no partially-updated state is ever
//! visible to the rendering surface.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use fincalc_core::calculations::displayable;
use fincalc_core::format::to_numeric;
use fincalc_core::{FieldKind, FieldSpec, InputMode, RawValue, is_valid, should_validate};

use crate::messages;

static EMPTY: RawValue = RawValue::Empty;

/// Read-only view of a form's raw values, with typed accessors for the
/// calculator functions.
#[derive(Debug, Clone, Copy)]
pub struct FieldValues<'a> {
    values: &'a BTreeMap<&'static str, RawValue>,
}

impl FieldValues<'_> {
    /// The raw value for `name`; unknown fields read as empty.
    pub fn raw(&self, name: &str) -> &RawValue {
        self.values.get(name).unwrap_or(&EMPTY)
    }

    /// The value coerced to `f64`; empty or unparsable input is `NaN`.
    pub fn numeric(&self, name: &str) -> f64 {
        to_numeric(self.raw(name))
    }

    /// The value as a finite number, or `None` when absent or degenerate.
    pub fn finite(&self, name: &str) -> Option<f64> {
        displayable(self.numeric(name))
    }

    /// The value as a positive whole year count.
    pub fn year_count(&self, name: &str) -> Option<u32> {
        let n = self.numeric(name);
        if n.is_finite() && n >= 1.0 {
            Some(n as u32)
        } else {
            None
        }
    }

    /// The value as a calendar date, if it holds one.
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.raw(name).as_date()
    }
}

/// Why a calculation produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// Show this message in the result panel (missing dates, missing
    /// amounts, degenerate arithmetic).
    #[error("{0}")]
    Notice(String),

    /// Clear the result silently; the derived field stays blank.
    #[error("result unavailable")]
    Unavailable,
}

/// Per-calculator parameterization of the shared form pipeline: the field
/// schema, optional field refinements beyond the kind rules, and the
/// formula that turns validated inputs into a result.
pub trait Calculator {
    type Output: Clone;

    /// The form's fields in declaration order. When the form carries a
    /// date pair, the start field is declared before the end field.
    fn fields(&self) -> &'static [FieldSpec];

    /// Calculator-specific bound check for a single field, run on top of
    /// the kind rules. Receives the full value map for cross-field rules.
    fn refine(
        &self,
        _field: &'static str,
        _value: &RawValue,
        _values: FieldValues<'_>,
    ) -> Option<String> {
        None
    }

    /// Whether the result is re-derived on every clean edit instead of on
    /// an explicit submit (the rent conversion forms).
    fn recompute_on_edit(&self) -> bool {
        false
    }

    fn compute(&self, mode: InputMode, values: FieldValues<'_>)
    -> Result<Self::Output, ComputeError>;
}

/// Outcome of a submit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Zero errors; the result was replaced.
    Completed,
    /// At least one field error; the error map was updated and any prior
    /// result left in place.
    Rejected,
    /// Validation passed but the calculation had nothing to show; a notice
    /// may have been stored.
    Unavailable,
}

/// Owns all state backing one on-screen calculator.
#[derive(Clone)]
pub struct FormOrchestrator<C: Calculator> {
    calculator: C,
    mode: InputMode,
    values: BTreeMap<&'static str, RawValue>,
    errors: BTreeMap<&'static str, String>,
    result: Option<C::Output>,
    notice: Option<String>,
    date_pair: Option<(&'static str, &'static str)>,
}

impl<C: Calculator> FormOrchestrator<C> {
    pub fn new(calculator: C) -> Self {
        let values: BTreeMap<_, _> = calculator
            .fields()
            .iter()
            .map(|spec| (spec.name, RawValue::Empty))
            .collect();
        let mut dates = calculator
            .fields()
            .iter()
            .filter(|spec| spec.kind == FieldKind::Date)
            .map(|spec| spec.name);
        let date_pair = match (dates.next(), dates.next()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        };
        Self {
            calculator,
            mode: InputMode::default(),
            values,
            errors: BTreeMap::new(),
            result: None,
            notice: None,
            date_pair,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switches the duration input mode and force-clears errors on every
    /// field the new mode gates out. Stale errors must not survive.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        let inactive: Vec<&'static str> = self
            .calculator
            .fields()
            .iter()
            .filter(|spec| !should_validate(spec.kind, mode))
            .map(|spec| spec.name)
            .collect();
        for name in inactive {
            self.errors.remove(name);
        }
        debug!(mode = mode.as_str(), "input mode changed");
    }

    /// Stores a raw field edit and re-validates just that field.
    ///
    /// Mode-inactive fields are force-cleared to no error regardless of
    /// content. Recompute-on-edit calculators re-derive their result after
    /// every clean edit; the others wait for [`submit`](Self::submit).
    pub fn edit(&mut self, field: &str, value: RawValue) {
        let Some(spec) = self.spec(field).copied() else {
            warn!(field, "edit on unknown field ignored");
            return;
        };
        self.values.insert(spec.name, value);
        debug!(field = spec.name, "field edited");

        if self.calculator.recompute_on_edit() {
            self.refine_and_derive(spec.name);
            return;
        }

        if should_validate(spec.kind, self.mode) {
            let value = &self.values[spec.name];
            if is_valid(spec.kind, value, self.mode) {
                self.errors.remove(spec.name);
            } else {
                self.errors
                    .insert(spec.name, messages::INVALID_INPUT.to_string());
            }
            if spec.kind == FieldKind::Date {
                self.check_date_order();
            }
        } else {
            self.errors.remove(spec.name);
        }
    }

    /// Re-validates the entire active field set in one pass, including
    /// fields the user never touched, then computes if nothing failed.
    ///
    /// On field errors the prior result stays in place; a successful
    /// computation replaces it atomically.
    pub fn submit(&mut self) -> SubmitStatus {
        let mut has_error = false;
        for spec in self.calculator.fields() {
            if !should_validate(spec.kind, self.mode) {
                self.errors.remove(spec.name);
                continue;
            }
            let value = &self.values[spec.name];
            let error = if !is_valid(spec.kind, value, self.mode) {
                Some(messages::INVALID_INPUT.to_string())
            } else {
                self.calculator
                    .refine(spec.name, value, FieldValues { values: &self.values })
            };
            match error {
                Some(message) => {
                    self.errors.insert(spec.name, message);
                    has_error = true;
                }
                None => {
                    self.errors.remove(spec.name);
                }
            }
        }

        if has_error {
            warn!(errors = self.errors.len(), "submit rejected");
            return SubmitStatus::Rejected;
        }

        match self
            .calculator
            .compute(self.mode, FieldValues { values: &self.values })
        {
            Ok(output) => {
                self.result = Some(output);
                self.notice = None;
                SubmitStatus::Completed
            }
            Err(ComputeError::Notice(message)) => {
                debug!(%message, "computation unavailable");
                self.result = None;
                self.notice = Some(message);
                SubmitStatus::Unavailable
            }
            Err(ComputeError::Unavailable) => {
                self.result = None;
                self.notice = None;
                SubmitStatus::Unavailable
            }
        }
    }

    pub fn value(&self, field: &str) -> &RawValue {
        self.values.get(field).unwrap_or(&EMPTY)
    }

    pub fn values(&self) -> FieldValues<'_> {
        FieldValues { values: &self.values }
    }

    /// The current inline error for `field`, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The last successfully computed result, if any.
    pub fn result(&self) -> Option<&C::Output> {
        self.result.as_ref()
    }

    /// Top-level result-panel message (e.g. "select a date"), if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn spec(&self, field: &str) -> Option<&FieldSpec> {
        self.calculator.fields().iter().find(|s| s.name == field)
    }

    /// Rent-style flow: refine the edited field, and on a clean edit
    /// re-derive the result or blank it when inputs are incomplete.
    fn refine_and_derive(&mut self, field: &'static str) {
        let refined = self
            .calculator
            .refine(field, &self.values[field], FieldValues { values: &self.values });
        match refined {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(field);
                match self
                    .calculator
                    .compute(self.mode, FieldValues { values: &self.values })
                {
                    Ok(output) => {
                        self.result = Some(output);
                        self.notice = None;
                    }
                    Err(_) => {
                        self.result = None;
                        self.notice = None;
                    }
                }
            }
        }
    }

    /// Paired start/end ordering check, run whenever a date field changes.
    /// A valid ordering clears both date errors, mirroring the pickers.
    fn check_date_order(&mut self) {
        let Some((start_name, end_name)) = self.date_pair else {
            return;
        };
        let start = self.values[start_name].as_date();
        let end = self.values[end_name].as_date();
        match (start, end) {
            (Some(start), Some(end)) if start > end => {
                self.errors
                    .insert(start_name, messages::START_AFTER_END.to_string());
                self.errors
                    .insert(end_name, messages::END_BEFORE_START.to_string());
            }
            _ => {
                self.errors.remove(start_name);
                self.errors.remove(end_name);
            }
        }
    }
}
