//! Error types for the reporting core.
//!
//! This module provides:
//! - [`ReportError`]: the single error type surfaced to callers
//! - [`ErrorKind`]: classification into network, malformed-response,
//!   invalid-input and superseded failures

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

use crate::fetcher::{QueryParams, ReportEndpoint};

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while building a report.
///
/// Every variant that originates from an external call carries the endpoint
/// and the parameters that were attempted, so the caller can tell the user
/// exactly which report failed.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Month outside 1..=12 or an unparseable `YYYY-MM` string.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Start boundary after end boundary.
    #[error("Invalid range: {start} is after {end}")]
    InvalidRange {
        /// Requested start, as the caller supplied it
        start: String,
        /// Requested end, as the caller supplied it
        end: String,
    },

    /// The call did not complete within the configured timeout.
    #[error("Timeout fetching {endpoint} ({params})")]
    Timeout {
        endpoint: ReportEndpoint,
        params: QueryParams,
    },

    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("Network error fetching {endpoint} ({params}): {message}")]
    Network {
        endpoint: ReportEndpoint,
        params: QueryParams,
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("HTTP {status} fetching {endpoint} ({params}): {message}")]
    Http {
        endpoint: ReportEndpoint,
        params: QueryParams,
        status: u16,
        message: String,
    },

    /// The body could not be decoded into the documented shape.
    #[error("Malformed {endpoint} response ({params}): {message}")]
    Decode {
        endpoint: ReportEndpoint,
        params: QueryParams,
        message: String,
    },

    /// A newer invocation for the same view was started before this one
    /// resolved; its result must not be shown.
    #[error("Superseded: generation {generation} finished after generation {latest} started")]
    Superseded { generation: u64, latest: u64 },

    /// Amounts that decoded fine but whose total does not fit in a `Decimal`.
    #[error("Amount overflow while totalling {0}")]
    AmountOverflow(String),

    #[error("Invalid configuration value: {0}")]
    Config(String),
}

impl ReportError {
    /// Returns the classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use condodash_reports::errors::{ErrorKind, ReportError};
    ///
    /// let error = ReportError::InvalidPeriod("2024-13".to_string());
    /// assert_eq!(error.kind(), ErrorKind::InvalidInput);
    ///
    /// let error = ReportError::Superseded { generation: 1, latest: 2 };
    /// assert_eq!(error.kind(), ErrorKind::Superseded);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPeriod(_) | Self::InvalidRange { .. } | Self::Config(_) => {
                ErrorKind::InvalidInput
            }
            Self::Timeout { .. } | Self::Network { .. } | Self::Http { .. } => ErrorKind::Network,
            Self::Decode { .. } | Self::AmountOverflow(_) => ErrorKind::MalformedResponse,
            Self::Superseded { .. } => ErrorKind::Superseded,
        }
    }

    /// The endpoint involved, when the error came from an external call.
    pub fn endpoint(&self) -> Option<ReportEndpoint> {
        match self {
            Self::Timeout { endpoint, .. }
            | Self::Network { endpoint, .. }
            | Self::Http { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(*endpoint),
            _ => None,
        }
    }

    /// The parameters attempted, when the error came from an external call.
    pub fn params(&self) -> Option<&QueryParams> {
        match self {
            Self::Timeout { params, .. }
            | Self::Network { params, .. }
            | Self::Http { params, .. }
            | Self::Decode { params, .. } => Some(params),
            _ => None,
        }
    }

    pub(crate) fn decode(
        endpoint: ReportEndpoint,
        params: &QueryParams,
        err: serde_json::Error,
    ) -> Self {
        Self::Decode {
            endpoint,
            params: params.clone(),
            message: err.to_string(),
        }
    }
}
