use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ReportError, Result};
use crate::fetcher::QueryParams;

use super::enumerator::periods_between;

/// A single calendar month.
///
/// Backed by the first day of the month, so any `Period` that exists is a
/// valid calendar month. Ordering is by (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "PeriodRepr", try_from = "PeriodRepr")]
pub struct Period {
    first_day: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PeriodRepr {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| ReportError::InvalidPeriod(format!("{}-{:02}", year, month)))
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The following month, rolling December over into January of the next
    /// year. `None` only past the last representable year.
    pub fn next(&self) -> Option<Self> {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        Self::new(year, month).ok()
    }

    /// `months` calendar months earlier.
    pub fn checked_sub_months(&self, months: u32) -> Option<Self> {
        let index = self.year() as i64 * 12 + self.month() as i64 - 1 - months as i64;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = index.rem_euclid(12) as u32 + 1;
        Self::new(year, month).ok()
    }

    /// Chart label, e.g. `Jun 2025`.
    pub fn label(&self) -> String {
        self.first_day.format("%b %Y").to_string()
    }

    /// Axis label, e.g. `Jun`.
    pub fn short_label(&self) -> String {
        self.first_day.format("%b").to_string()
    }

    /// Query parameters for the `monthly-balance` endpoint.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("month", self.month())
            .with("year", self.year())
    }
}

impl From<Period> for PeriodRepr {
    fn from(period: Period) -> Self {
        Self {
            year: period.year(),
            month: period.month(),
        }
    }
}

impl TryFrom<PeriodRepr> for Period {
    type Error = ReportError;

    fn try_from(repr: PeriodRepr) -> Result<Self> {
        Period::new(repr.year, repr.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Parses the `YYYY-MM` form produced by month pickers.
impl FromStr for Period {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ReportError::InvalidPeriod(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Period::new(year, month).map_err(|_| invalid())
    }
}

/// An inclusive range of months.
///
/// A range whose start is after its end is empty rather than an error;
/// callers that need a date range get the error from [`to_date_range`](Self::to_date_range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: Period,
    pub end: Period,
}

impl MonthRange {
    pub fn new(start: Period, end: Period) -> Self {
        Self { start, end }
    }

    /// The `months`-long window ending with the month of `today`.
    ///
    /// `months = 6` in June covers January through June. Zero is treated as one.
    pub fn trailing(today: NaiveDate, months: u32) -> Self {
        let end = Period::from_date(today);
        let start = end
            .checked_sub_months(months.max(1) - 1)
            .unwrap_or(end);
        Self { start, end }
    }

    pub fn periods(&self) -> Vec<Period> {
        periods_between(self.start, self.end)
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let months = (self.end.year() - self.start.year()) as i64 * 12 + self.end.month() as i64
            - self.start.month() as i64;
        months as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// First day of the start month through the last day of the end month.
    pub fn to_date_range(&self) -> Result<DateRange> {
        DateRange::new(self.start.first_day(), self.end.last_day())
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start.label(), self.end.label())
    }
}

/// An inclusive range of calendar dates, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRepr")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct DateRangeRepr {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeRepr> for DateRange {
    type Error = ReportError;

    fn try_from(repr: DateRangeRepr) -> Result<Self> {
        DateRange::new(repr.start, repr.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReportError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// January 1st of `today`'s year through `today`.
    pub fn year_to_date(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self { start, end: today }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// `start`/`end` as ISO dates, the form every date-ranged endpoint takes.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("start", self.start.format("%Y-%m-%d"))
            .with("end", self.end.format("%Y-%m-%d"))
    }
}
