//! Runtime configuration for the reporting core.

use std::time::Duration;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_RANGE_MONTHS, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Settings shared by the fetcher and whoever initialises the presentation
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsConfig {
    /// Base URL of the property-management API, without the `/reports` suffix.
    pub api_base_url: String,
    /// Per-call timeout. No retries are attempted.
    pub request_timeout: Duration,
    /// Length of the default month window, ending at the current month.
    pub default_range_months: u32,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            default_range_months: DEFAULT_RANGE_MONTHS,
        }
    }
}
