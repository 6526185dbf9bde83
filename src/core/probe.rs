use crate::core::{Endpoint, ProbeOutcome, Prober, Result};
use crate::utils::error::MonitorError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use std::time::{Duration, Instant};

/// 健康門檻與請求逾時，單位為毫秒
pub const RESPONSE_TIME_THRESHOLD: Duration = Duration::from_millis(500);
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(500);

/// Probes endpoints over HTTP with a shared client.
///
/// One request per endpoint per cycle, no retries. A probe is healthy iff
/// the request completed, the status is 2xx and the measured latency stayed
/// within [`RESPONSE_TIME_THRESHOLD`] (inclusive). The client timeout aborts
/// anything slower than [`REQUEST_TIMEOUT`], which counts as a failure.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("uptrack/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    fn build_request(&self, endpoint: &Endpoint) -> Result<RequestBuilder> {
        let method = Method::from_bytes(endpoint.effective_method().as_bytes()).map_err(|_| {
            MonitorError::RequestBuildError {
                message: format!("invalid HTTP method '{}'", endpoint.effective_method()),
            }
        })?;

        let attach_body = method != Method::GET && !endpoint.body.is_empty();

        let mut headers = HeaderMap::new();
        if attach_body {
            // Default for probe bodies; explicit endpoint headers replace it below.
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (key, value) in &endpoint.headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                MonitorError::RequestBuildError {
                    message: format!("invalid header name '{}'", key),
                }
            })?;
            let value =
                HeaderValue::from_str(value).map_err(|_| MonitorError::RequestBuildError {
                    message: format!("invalid value for header '{}'", key),
                })?;
            headers.insert(name, value);
        }

        let mut request = self
            .client
            .request(method, endpoint.url.as_str())
            .headers(headers);
        if attach_body {
            request = request.body(endpoint.body.clone());
        }
        Ok(request)
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome {
        let request = match self.build_request(endpoint) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(endpoint = %endpoint.name, "Error creating request: {}", e);
                return ProbeOutcome {
                    success: false,
                    latency: Duration::ZERO,
                    status: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let start = Instant::now();
        let result = request.send().await;
        let latency = start.elapsed();

        match result {
            Ok(response) => {
                let status = response.status();
                ProbeOutcome {
                    success: status.is_success() && latency <= RESPONSE_TIME_THRESHOLD,
                    latency,
                    status: Some(status.as_u16()),
                    error: None,
                }
            }
            Err(e) => {
                tracing::debug!(endpoint = %endpoint.name, "Probe request failed: {}", e);
                ProbeOutcome {
                    success: false,
                    latency,
                    status: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
