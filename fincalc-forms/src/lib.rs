//! Form-state layer for the financial calculators.
//!
//! A rendering surface feeds raw field edits, mode changes, and submit
//! events into a [`FormOrchestrator`] and reads back the current values,
//! field errors, and calculation result. All state is owned by one
//! orchestrator instance per on-screen calculator; nothing is shared or
//! persisted.

pub mod calculators;
pub mod form;
pub mod messages;

pub use form::{Calculator, ComputeError, FieldValues, FormOrchestrator, SubmitStatus};
