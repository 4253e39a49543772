//! Domain operations: health check and water plants.
//!
//! # Design
//! `Api` glues the deterministic [`PanelClient`] to an [`Execute`]
//! transport and maps every outcome into an [`OperationResult`]. Each
//! operation issues exactly one transport call — watering drives a physical
//! pump, and an automatic retry after an ambiguous failure (say, a timeout
//! after the command was actually accepted) could double the watering
//! duration. Callers must likewise not start a second watering command
//! while one is outstanding; the api does not queue overlapping calls.
//!
//! Every produced `Failure` is logged once with the operation name and any
//! structured response payload. Successes are not logged.

use crate::client::PanelClient;
use crate::config::ClientConfig;
use crate::error::{extract_message, Failure, OperationResult};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Execute, HttpTransport};
use crate::types::{HealthResult, TimerSeconds, WaterPlantsRequest, WaterPlantsResult};

/// Entry point for the two remote operations, generic over the transport.
pub struct Api<E = HttpTransport> {
    client: PanelClient,
    transport: E,
}

impl Api<HttpTransport> {
    /// Build an api backed by the real HTTP transport.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: PanelClient::new(config),
            transport: HttpTransport::new(config),
        }
    }
}

impl<E: Execute> Api<E> {
    /// Build an api over a caller-supplied transport.
    pub fn with_transport(config: &ClientConfig, transport: E) -> Self {
        Self {
            client: PanelClient::new(config),
            transport,
        }
    }

    /// Read-only probe of the service's health endpoint.
    pub fn health_check(&self) -> OperationResult<HealthResult> {
        let request = self.client.build_health_check();
        let response = self.dispatch("health_check", request)?;
        let payload = response.body.clone();
        self.client
            .parse_health_check(response)
            .map_err(|f| log_failure("health_check", f, Some(&payload)))
    }

    /// Command the pump to run for `timer` seconds.
    ///
    /// Takes an already-validated [`TimerSeconds`], so an out-of-range
    /// duration cannot reach the transport at all. Never retried.
    pub fn water_plants(&self, timer: TimerSeconds) -> OperationResult<WaterPlantsResult> {
        let input = WaterPlantsRequest::new(timer);
        let request = self
            .client
            .build_water_plants(&input)
            .map_err(|f| log_failure("water_plants", f, None))?;
        let response = self.dispatch("water_plants", request)?;
        let payload = response.body.clone();
        self.client
            .parse_water_plants(response)
            .map_err(|f| log_failure("water_plants", f, Some(&payload)))
    }

    /// Execute one request, normalizing transport faults into `Failure`.
    fn dispatch(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse, Failure> {
        self.transport.execute(request).map_err(|e| {
            log_failure(
                operation,
                Failure::transport(extract_message(None, Some(&e.message))),
                None,
            )
        })
    }
}

/// Emit the diagnostic event for a failure and hand it back unchanged.
fn log_failure(operation: &'static str, failure: Failure, payload: Option<&str>) -> Failure {
    tracing::error!(
        operation,
        kind = ?failure.kind,
        payload = payload.unwrap_or_default(),
        "{}",
        failure.message
    );
    failure
}
