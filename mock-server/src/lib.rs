use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

/// The one device the mock knows about.
pub const PUMP_DEVICE: &str = "pump";

/// Shared mock state: a health toggle and a command counter, so tests can
/// simulate a degraded service and verify at-most-once command delivery.
#[derive(Clone)]
pub struct ServiceState {
    healthy: Arc<AtomicBool>,
    commands: Arc<AtomicUsize>,
    device_id: Uuid,
}

impl ServiceState {
    pub fn new() -> Self {
        Self {
            healthy: Arc::new(AtomicBool::new(true)),
            commands: Arc::new(AtomicUsize::new(0)),
            device_id: Uuid::new_v4(),
        }
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// How many watering commands the mock has accepted.
    pub fn water_commands(&self) -> usize {
        self.commands.load(Ordering::SeqCst)
    }

    pub fn device_id(&self) -> Uuid {
        self.device_id
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
pub struct TurnOnTimer {
    pub device_name: String,
    pub timer_seconds: u32,
}

/// Acknowledgment body for an accepted watering command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerAck {
    pub status: String,
    pub message: String,
    pub device_id: String,
    pub device_name: String,
    pub timer_seconds: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

pub fn app() -> Router {
    app_with_state(ServiceState::new())
}

pub fn app_with_state(state: ServiceState) -> Router {
    Router::new()
        .route("/health/", get(health))
        .route("/switchbot/turn-on-timer", post(turn_on_timer))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_state(listener: TcpListener, state: ServiceState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn health(State(state): State<ServiceState>) -> Json<serde_json::Value> {
    let status = if state.healthy.load(Ordering::SeqCst) {
        "ok"
    } else {
        "degraded"
    };
    Json(json!({ "status": status }))
}

async fn turn_on_timer(
    State(state): State<ServiceState>,
    Json(input): Json<TurnOnTimer>,
) -> Result<Json<TimerAck>, (StatusCode, Json<ErrorBody>)> {
    if input.device_name != PUMP_DEVICE {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                message: "device not found".to_string(),
            }),
        ));
    }
    if !(1..=60).contains(&input.timer_seconds) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                message: format!(
                    "timer_seconds must be between 1 and 60, got {}",
                    input.timer_seconds
                ),
            }),
        ));
    }

    state.commands.fetch_add(1, Ordering::SeqCst);
    Ok(Json(TimerAck {
        status: "ok".to_string(),
        message: "Watering started".to_string(),
        device_id: state.device_id.to_string(),
        device_name: input.device_name,
        timer_seconds: input.timer_seconds,
    }))
}
