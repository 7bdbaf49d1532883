pub mod calculations;
pub mod format;
pub mod models;
pub mod period;
pub mod validate;

pub use models::*;
pub use period::{DAYS_PER_YEAR, PeriodError, resolve_period_years};
pub use validate::{is_valid, should_validate};
