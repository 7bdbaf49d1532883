//! The calculator definitions: schemas, refinements, and formulas wired
//! into the shared form pipeline.

pub mod annual_rate;
pub mod exchange_fee;
pub mod final_amount;
pub mod rent;

pub use annual_rate::{AnnualRateCalculator, AnnualRateResult};
pub use exchange_fee::ExchangeFeeCalculator;
pub use final_amount::{FinalAmountCalculator, FinalAmountResult};
pub use rent::{ConversionRateCalculator, JeonseToMonthlyCalculator, MonthlyToJeonseCalculator};
