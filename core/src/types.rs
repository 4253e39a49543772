//! Domain DTOs for the watering service.
//!
//! # Design
//! These types mirror the remote service's wire schema (snake_case JSON)
//! but are defined independently of the mock-server crate; integration
//! tests catch schema drift. Each endpoint gets a closed, fully-typed
//! record — no untyped parameter bags.

use serde::{Deserialize, Serialize};

use crate::error::TimerOutOfRange;

/// The only device this panel commands.
pub const PUMP_DEVICE: &str = "pump";

/// Fixed message reported when the service answers but is not healthy.
pub const NON_OK_HEALTH_MESSAGE: &str = "Health check returned non-ok status";

/// A validated watering duration, 1..=60 seconds inclusive.
///
/// The bound is a safety limit, not a protocol one: the command drives a
/// physical pump, and an unvalidated duration must not be representable.
/// Constructing a `TimerSeconds` is the caller-side validation boundary —
/// an out-of-range value never reaches the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimerSeconds(u32);

impl TimerSeconds {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 60;

    pub fn new(seconds: u32) -> Result<Self, TimerOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&seconds) {
            Ok(Self(seconds))
        } else {
            Err(TimerOutOfRange(seconds))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Request payload for the turn-on-timer endpoint. Always targets the pump.
#[derive(Debug, Clone, Serialize)]
pub struct WaterPlantsRequest {
    pub device_name: &'static str,
    pub timer_seconds: TimerSeconds,
}

impl WaterPlantsRequest {
    pub fn new(timer_seconds: TimerSeconds) -> Self {
        Self {
            device_name: PUMP_DEVICE,
            timer_seconds,
        }
    }
}

/// The service's acknowledgment of a watering command, echoed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterPlantsResult {
    pub status: String,
    pub message: String,
    pub device_id: String,
    pub device_name: String,
    pub timer_seconds: u32,
}

/// Outcome of a health check that reached the service.
///
/// `healthy` is true only when the payload's `status` field equals `"ok"`.
/// Any other payload is unhealthy-but-answered: not a transport failure,
/// and `message` explains why. `raw` keeps the payload for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthResult {
    pub healthy: bool,
    pub message: Option<String>,
    pub raw: serde_json::Value,
}
