//! Client core for a home watering control service.
//!
//! # Overview
//! Wraps a remote device-control REST service (two endpoints: a health
//! probe and a pump timer command) behind typed domain operations, and
//! persists a small preferences record locally.
//!
//! # Design
//! - `PanelClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network; the [`transport::Execute`] seam
//!   runs the actual round-trip, so every operation is testable against a
//!   scripted transport.
//! - `Api` composes the two and normalizes every outcome into
//!   [`error::OperationResult`]: no panic and no raw transport error
//!   crosses that boundary.
//! - One request per call, never retried — the watering command has a
//!   physical side effect.
//! - DTOs are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod settings;
pub mod transport;
pub mod types;

pub use api::Api;
pub use client::PanelClient;
pub use config::ClientConfig;
pub use error::{extract_message, ConfigError, Failure, FailureKind, OperationResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use settings::{Settings, SettingsStore};
pub use transport::{Execute, HttpTransport};
pub use types::{HealthResult, TimerSeconds, WaterPlantsRequest, WaterPlantsResult};
