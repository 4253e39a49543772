//! HTTP messages as plain data.
//!
//! # Design
//! Requests and responses are described as owned values with no I/O
//! attached. `PanelClient` builds `HttpRequest` values and parses
//! `HttpResponse` values; executing the round-trip is the job of an
//! [`Execute`](crate::transport::Execute) implementation. This split keeps
//! the build/parse logic deterministic and testable without a network.

/// HTTP method for a request. The remote service only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `PanelClient::build_*` methods. `path` is the full URL; the
/// transport merges the configured headers (authorization, content-type)
/// on top of `headers` before sending.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by an `Execute` implementation after the round-trip, then fed
/// to `PanelClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
