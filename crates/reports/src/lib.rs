//! Condodash Reports Crate
//!
//! Reporting core of the property-management dashboard: turns the period
//! boundaries a user selects into report fetches against the REST API and
//! reduces the responses into view models for charts and tables.
//!
//! # Overview
//!
//! The crate supports:
//! - Month enumeration across year boundaries
//! - Concurrent per-month balance fetches with results kept in period order
//! - Income/expense totals, per-resident delinquency grouping and the
//!   reserve-fund health percentage
//! - Pass-through reports (collection, budget vs actual, annual summary,
//!   provider and extra expenses, bank reconciliation)
//! - Latest-request-wins tracking for range-driven views
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Presentation    | --> |  MonthRange /    |  (user-selected boundaries)
//! +------------------+     |  DateRange       |
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ReportService   |  (fan-out, aggregation)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ReportFetcher   |  (HTTP, or a mock in tests)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  View models     |  (records, groups, snapshot)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Period`] - A calendar month
//! - [`MonthRange`] / [`DateRange`] - Inclusive report boundaries
//! - [`ReportService`] - Report aggregator over an injected fetcher
//! - [`GenerationTracker`] - Discards results of superseded invocations
//! - [`ReportError`] - Single error type with endpoint and parameter context

pub mod config;
pub mod constants;
pub mod errors;
pub mod fetcher;
pub mod periods;
pub mod reports;

mod utils;

pub use config::ReportsConfig;
pub use errors::{ErrorKind, ReportError, Result};
pub use fetcher::{HttpReportFetcher, QueryParams, ReportEndpoint, ReportFetcher};
pub use periods::{enumerate_periods, periods_between, DateRange, MonthRange, Period};
pub use reports::{
    DashboardRequest, DashboardSnapshot, Generation, GenerationTracker, ReportService,
    ReportServiceTrait,
};
