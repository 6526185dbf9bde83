use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl Endpoint {
    /// 未指定 method 時預設為 GET
    pub fn effective_method(&self) -> &str {
        if self.method.is_empty() {
            "GET"
        } else {
            &self.method
        }
    }

    pub fn domain(&self) -> String {
        extract_domain(&self.url)
    }
}

/// Quiesced per-domain counters for one monitoring cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainStats {
    pub success: u64,
    pub total: u64,
}

impl DomainStats {
    /// Rounded availability percentage, half away from zero.
    pub fn availability_percent(&self) -> u64 {
        (100.0 * self.success as f64 / self.total as f64).round() as u64
    }
}

/// Result of a single probe attempt.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub success: bool,
    pub latency: Duration,
    pub status: Option<u16>,
    pub error: Option<String>,
}

/// Strips scheme, path and port from a URL string.
///
/// Best-effort on malformed input; never fails.
pub fn extract_domain(url: &str) -> String {
    let rest = url.split_once("//").map_or(url, |(_, tail)| tail);
    let host_port = rest.split('/').next().unwrap_or(rest);
    let host = host_port.split(':').next().unwrap_or(host_port);
    host.to_string()
}
