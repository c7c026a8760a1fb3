//! The fetch capability the aggregator depends on.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;

use super::{QueryParams, ReportEndpoint};

/// Trait for anything that can answer report queries.
///
/// The aggregator only ever talks to this trait; [`HttpReportFetcher`](super::HttpReportFetcher)
/// is the production implementation and tests substitute canned responses.
///
/// Implementations must not retry: a failed call is reported as-is, carrying
/// the endpoint and params in the error.
#[async_trait]
pub trait ReportFetcher: Send + Sync {
    /// Fetch the JSON body of `endpoint` for `params`.
    async fn fetch(&self, endpoint: ReportEndpoint, params: &QueryParams) -> Result<Value>;
}
