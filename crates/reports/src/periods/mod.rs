//! Period enumeration.
//!
//! Turns month or date boundaries selected by the presentation layer into
//! the ordered periods that report fetches are issued for.

mod enumerator;
mod periods_model;

pub use enumerator::{enumerate_periods, periods_between};
pub use periods_model::{DateRange, MonthRange, Period};
