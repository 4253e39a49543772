//! Stateless request builder and response parser for the watering service.
//!
//! # Design
//! `PanelClient` holds only the base URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]. The transport executes the round-trip in between,
//! keeping this module deterministic and free of I/O dependencies.

use crate::config::ClientConfig;
use crate::error::{extract_message, Failure, OperationResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{HealthResult, WaterPlantsRequest, WaterPlantsResult, NON_OK_HEALTH_MESSAGE};

/// Path of the read-only health endpoint. The trailing slash is part of
/// the remote route.
const HEALTH_PATH: &str = "/health/";
/// Path of the watering command endpoint.
const TURN_ON_TIMER_PATH: &str = "/switchbot/turn-on-timer";

/// Synchronous, stateless build/parse client for the watering service.
#[derive(Debug, Clone)]
pub struct PanelClient {
    base_url: String,
}

impl PanelClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
        }
    }

    pub fn build_health_check(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{HEALTH_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Interpret a health response.
    ///
    /// A non-2xx status is an application failure. A 2xx response is always
    /// `Ok`: healthy exactly when the payload's `status` field is `"ok"`,
    /// unhealthy (with [`NON_OK_HEALTH_MESSAGE`]) for any other payload,
    /// including a body that is not JSON at all.
    pub fn parse_health_check(&self, response: HttpResponse) -> OperationResult<HealthResult> {
        check_status(&response)?;
        let raw: serde_json::Value =
            serde_json::from_str(&response.body).unwrap_or(serde_json::Value::Null);
        let healthy = raw.get("status").and_then(|s| s.as_str()) == Some("ok");
        Ok(HealthResult {
            healthy,
            message: (!healthy).then(|| NON_OK_HEALTH_MESSAGE.to_string()),
            raw,
        })
    }

    pub fn build_water_plants(&self, input: &WaterPlantsRequest) -> Result<HttpRequest, Failure> {
        let body = serde_json::to_string(input)
            .map_err(|e| Failure::application(format!("failed to encode request: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{TURN_ON_TIMER_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Interpret a watering acknowledgment. A 2xx body that does not match
    /// the acknowledgment schema is an application failure — the result is
    /// a closed record, never a partial passthrough.
    pub fn parse_water_plants(&self, response: HttpResponse) -> OperationResult<WaterPlantsResult> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| Failure::application(format!("unexpected acknowledgment payload: {e}")))
    }
}

/// Map a non-2xx response to a `Failure`, preferring the service's own
/// `message` field over a status-derived description.
fn check_status(response: &HttpResponse) -> Result<(), Failure> {
    if response.is_success() {
        return Ok(());
    }
    let status_message = format!("request failed with status {}", response.status);
    Err(Failure::application(extract_message(
        Some(&response.body),
        Some(&status_message),
    )))
}
