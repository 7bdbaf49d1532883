//! Closed-form financial calculations.
//!
//! Every function here is pure and synchronous: same inputs, same outputs,
//! no I/O. Degenerate inputs produce `NaN`/`Infinity` values or `None`
//! rather than panics; callers check finiteness before display.

pub mod common;
pub mod compound;
pub mod exchange;
pub mod rent;

pub use common::{displayable, round_dp2};
pub use compound::{GrowthPoint, annual_growth_rate, final_amount, growth_series};
pub use exchange::{FeeScheduleRow, fee_schedule};
