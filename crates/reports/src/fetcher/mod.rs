//! Report fetching.
//!
//! This module contains:
//! - [`ReportEndpoint`] and [`QueryParams`], which name a single API call
//! - The [`ReportFetcher`] trait the aggregator is written against
//! - [`HttpReportFetcher`], the `reqwest`-backed implementation

mod endpoint;
mod http;
mod traits;

pub use endpoint::{QueryParams, ReportEndpoint};
pub use http::HttpReportFetcher;
pub use traits::ReportFetcher;
