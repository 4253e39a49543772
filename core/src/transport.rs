//! Request execution over ureq.
//!
//! # Design
//! The [`Execute`] trait is the I/O seam: `PanelClient` stays deterministic
//! and everything network-shaped lives behind this one method, so tests can
//! substitute a counting or failing transport. [`HttpTransport`] is the real
//! implementation — a `ureq::Agent` configured once from [`ClientConfig`]
//! with the global timeout, and with status-as-error disabled so non-2xx
//! responses come back as data for the client to interpret.
//!
//! One request per call: no retries, no backoff, no caching. Once issued, a
//! request runs to completion or timeout.

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip. Implementations must not retry.
pub trait Execute {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// ureq-backed transport with the configured timeout and headers.
#[derive(Debug)]
pub struct HttpTransport {
    agent: ureq::Agent,
    headers: Vec<(String, String)>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout()))
            .build()
            .new_agent();
        Self {
            agent,
            headers: config.headers().to_vec(),
        }
    }
}

impl Execute for HttpTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let headers = merge_headers(&self.headers, &request.headers);

        let result = match request.method {
            HttpMethod::Get => {
                let mut call = self.agent.get(&request.path);
                for (name, value) in &headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                call.call()
            }
            HttpMethod::Post => {
                let mut call = self.agent.post(&request.path);
                for (name, value) in &headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                match request.body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Merge per-call headers under the configured ones.
///
/// Configured headers win by name (case-insensitive): a per-call header can
/// add a new name but never silently replace a configured value such as
/// `content-type`.
pub fn merge_headers(
    configured: &[(String, String)],
    per_call: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = configured.to_vec();
    for (name, value) in per_call {
        let present = merged
            .iter()
            .any(|(existing, _)| existing.eq_ignore_ascii_case(name));
        if !present {
            merged.push((name.clone(), value.clone()));
        }
    }
    merged
}
