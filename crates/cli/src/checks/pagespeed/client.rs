// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PageSpeed Insights HTTP client.
//!
//! Uses ureq (sync HTTP), one GET per analysis. Non-2xx responses are
//! returned as bodies because the API reports failures as JSON.

use std::time::Duration;

/// Public `runPagespeed` endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v1/runPagespeed";

/// Default time allowed for the whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that keep a response body from being read at all.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Source of raw PageSpeed Insights responses.
pub trait InsightsSource: Send {
    /// Fetch the response body for analyzing `url` with `key`.
    fn fetch(&self, url: &str, key: &str) -> Result<String, FetchError>;
}

/// Live client for the PageSpeed Insights API.
pub struct HttpInsights {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpInsights {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }
}

impl Default for HttpInsights {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }
}

impl InsightsSource for HttpInsights {
    fn fetch(&self, url: &str, key: &str) -> Result<String, FetchError> {
        tracing::debug!("requesting PageSpeed Insights for {}", url);

        let response = self
            .agent
            .get(&self.endpoint)
            .query("url", url)
            .query("key", key)
            .call()
            .map_err(|e| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            tracing::warn!("PageSpeed Insights returned HTTP {}", status);
        }

        response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}
