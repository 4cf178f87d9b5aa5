//! Low-level request executor for the contacts backend.

use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use super::error::TransportError;

/// Fixed request timeout. A request runs to completion, failure, or timeout;
/// there is no retry and no cancellation token.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Raw outcome of one request attempt, before normalization.
///
/// The transport never classifies: a response of ANY status is a
/// [`Response`](RawOutcome::Response), and only the absence of a response is
/// a [`TransportFailure`](RawOutcome::TransportFailure). Success and error
/// are decided by the normalizer from the envelope alone.
#[derive(Debug, Clone)]
pub enum RawOutcome {
    /// An HTTP response was obtained, whatever its status.
    Response {
        /// The HTTP status code returned by the server.
        status: StatusCode,
        /// The raw response body text.
        body: String,
    },

    /// No response was obtained: connection refused, timeout, DNS failure,
    /// or an unusable request URL.
    TransportFailure {
        /// Human-readable description of the underlying failure.
        description: String,
    },
}

/// Configured HTTP request executor.
///
/// Holds the resolved base URL and a `reqwest` client with the fixed
/// timeout and JSON content-type default header. Safe to share across
/// threads and async tasks.
pub struct TransportClient {
    base_url: Url,
    client: reqwest::Client,
}

impl TransportClient {
    /// Creates a transport with the default 10 second timeout.
    pub fn new(base_url: Url) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    /// Creates a transport with an explicit timeout.
    pub fn with_timeout(mut base_url: Url, timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        // Base paths like "/api" must keep their last segment when request
        // paths are joined onto them.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Executes one request and returns its raw outcome.
    ///
    /// `path` is resolved relative to the base URL (a leading `/` is
    /// accepted and does not escape the base path). `query` pairs are
    /// appended to the URL; `body` is sent as JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, &str)]>,
    ) -> RawOutcome {
        let url = match self.base_url.join(path.trim_start_matches('/')) {
            Ok(url) => url,
            Err(e) => {
                warn!(path = path; "Could not resolve request path against base URL: {e}");
                return RawOutcome::TransportFailure {
                    description: e.to_string(),
                };
            }
        };

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let start = Instant::now();
        match request.send().await {
            Ok(response) => {
                let status = response.status();
                let latency_ms = start.elapsed().as_millis() as u64;
                debug!(method:% = method, url:% = url, status:% = status, latency_ms = latency_ms; "Request settled");

                match response.text().await {
                    Ok(body) => RawOutcome::Response { status, body },
                    Err(e) => {
                        warn!(method:% = method, url:% = url; "Could not read response body: {e}");
                        RawOutcome::TransportFailure {
                            description: e.to_string(),
                        }
                    }
                }
            }
            Err(e) => {
                warn!(method:% = method, url:% = url; "Request failed: {e}");
                RawOutcome::TransportFailure {
                    description: e.to_string(),
                }
            }
        }
    }
}
