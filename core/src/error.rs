//! Error taxonomy and failure-message normalization.
//!
//! # Design
//! Two families: `ConfigError` is fatal at construction time (the process
//! cannot meaningfully run without a base URL), while `Failure` is the
//! recoverable envelope every domain operation returns. `Failure` carries a
//! `FailureKind` so callers can tell a network-level fault from a service
//! that answered and said no — the two look identical in the message text
//! alone.
//!
//! `extract_message` is total: any combination of inputs produces a
//! non-empty, human-readable string.

use thiserror::Error;

/// Fatal configuration errors, raised before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No base URL was supplied; the client cannot be constructed.
    #[error("base URL must not be empty")]
    MissingBaseUrl,

    /// The configured timeout is not a positive number of milliseconds.
    #[error("invalid timeout: {0:?}")]
    InvalidTimeout(String),
}

/// A network-level fault reported by the transport: timeout, connection
/// refused, DNS failure. The service was never heard from.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Requested watering duration falls outside the safety bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timer must be between 1 and 60 seconds, got {0}")]
pub struct TimerOutOfRange(pub u32);

/// Distinguishes where a failure originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never completed: timeout, refused connection, DNS.
    Transport,
    /// The service answered, but with a non-2xx status or an undecodable
    /// success body.
    Application,
}

/// Uniform failure envelope returned by every domain operation.
///
/// The message is always non-empty; construction goes through
/// [`extract_message`] or an explicit string.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Application,
            message: message.into(),
        }
    }
}

/// Result shape of every domain operation: success payload or a `Failure`
/// with a non-empty message. Nothing panics or leaks a raw transport error
/// past this boundary.
pub type OperationResult<T> = Result<T, Failure>;

/// Fallback text when neither the service nor the transport said anything.
pub const GENERIC_FAILURE: &str = "request failed";

/// Derive a human-readable failure message with a fixed fallthrough order:
/// the service payload's `message` field if present and non-empty, then the
/// transport's own message, then [`GENERIC_FAILURE`].
///
/// `service_body` is the raw response body, if the service answered at all;
/// it is parsed leniently (a non-JSON body simply contributes nothing).
pub fn extract_message(service_body: Option<&str>, transport_message: Option<&str>) -> String {
    if let Some(body) = service_body {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }
    if let Some(msg) = transport_message {
        if !msg.is_empty() {
            return msg.to_string();
        }
    }
    GENERIC_FAILURE.to_string()
}
