use log::debug;

use crate::errors::Result;

use super::Period;

/// Every calendar month from `(start_year, start_month)` to
/// `(end_year, end_month)` inclusive, in ascending order.
///
/// Months outside 1..=12 are rejected. A start after the end yields an empty
/// sequence, not an error.
pub fn enumerate_periods(
    start_year: i32,
    start_month: u32,
    end_year: i32,
    end_month: u32,
) -> Result<Vec<Period>> {
    let start = Period::new(start_year, start_month)?;
    let end = Period::new(end_year, end_month)?;
    Ok(periods_between(start, end))
}

/// Same as [`enumerate_periods`] for already-validated boundaries.
pub fn periods_between(start: Period, end: Period) -> Vec<Period> {
    if start > end {
        debug!("Empty period range: {} is after {}", start, end);
        return Vec::new();
    }
    let mut periods = Vec::new();
    let mut current = Some(start);
    while let Some(period) = current {
        if period > end {
            break;
        }
        periods.push(period);
        current = period.next();
    }
    periods
}
