//! HTTP implementation of [`ReportFetcher`].
//!
//! Issues `GET <base>/reports/<endpoint>?<params>` with a per-call timeout.
//! There is no retry policy; timeouts, transport failures and non-2xx
//! statuses are mapped straight into [`ReportError`].

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::ReportsConfig;
use crate::errors::{ReportError, Result};

use super::{QueryParams, ReportEndpoint, ReportFetcher};

/// `reqwest`-backed report fetcher.
pub struct HttpReportFetcher {
    client: Client,
    base_url: String,
}

impl HttpReportFetcher {
    pub fn new(config: &ReportsConfig) -> Result<Self> {
        if config.api_base_url.trim().is_empty() {
            return Err(ReportError::Config("API base URL is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ReportError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: ReportEndpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl ReportFetcher for HttpReportFetcher {
    async fn fetch(&self, endpoint: ReportEndpoint, params: &QueryParams) -> Result<Value> {
        let url = self.url(endpoint);
        debug!("Report request: {} ({})", url, params);

        let response = self
            .client
            .get(&url)
            .query(params.as_slice())
            .send()
            .await
            .map_err(|e| transport_error(endpoint, params, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ReportError::Http {
                endpoint,
                params: params.clone(),
                status: status.as_u16(),
                message: http_error_message(status, &body),
            };
            error!("{}", err);
            return Err(err);
        }

        response.json::<Value>().await.map_err(|e| {
            if !e.is_decode() {
                return transport_error(endpoint, params, e);
            }
            let err = ReportError::Decode {
                endpoint,
                params: params.clone(),
                message: e.to_string(),
            };
            error!("{}", err);
            err
        })
    }
}

fn transport_error(
    endpoint: ReportEndpoint,
    params: &QueryParams,
    e: reqwest::Error,
) -> ReportError {
    let err = if e.is_timeout() {
        ReportError::Timeout {
            endpoint,
            params: params.clone(),
        }
    } else {
        ReportError::Network {
            endpoint,
            params: params.clone(),
            message: e.to_string(),
        }
    };
    error!("{}", err);
    err
}

/// The body text when the API sent one, the canonical reason otherwise.
fn http_error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
