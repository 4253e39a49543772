use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_state, ErrorBody, ServiceState, TimerAck};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- health ---

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/health/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_reports_degraded_after_toggle() {
    let state = ServiceState::new();
    state.set_healthy(false);
    let app = app_with_state(state);

    let resp = app
        .oneshot(Request::builder().uri("/health/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "degraded");
}

// --- turn-on-timer ---

#[tokio::test]
async fn turn_on_timer_echoes_acknowledgment() {
    let state = ServiceState::new();
    let app = app_with_state(state.clone());

    let resp = app
        .oneshot(json_request(
            "POST",
            "/switchbot/turn-on-timer",
            r#"{"device_name":"pump","timer_seconds":2}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ack: TimerAck = body_json(resp).await;
    assert_eq!(ack.status, "ok");
    assert_eq!(ack.message, "Watering started");
    assert_eq!(ack.device_id, state.device_id().to_string());
    assert_eq!(ack.device_name, "pump");
    assert_eq!(ack.timer_seconds, 2);
    assert_eq!(state.water_commands(), 1);
}

#[tokio::test]
async fn turn_on_timer_accepts_the_upper_bound() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/switchbot/turn-on-timer",
            r#"{"device_name":"pump","timer_seconds":60}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn turn_on_timer_rejects_zero_seconds() {
    let state = ServiceState::new();
    let app = app_with_state(state.clone());

    let resp = app
        .oneshot(json_request(
            "POST",
            "/switchbot/turn-on-timer",
            r#"{"device_name":"pump","timer_seconds":0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err: ErrorBody = body_json(resp).await;
    assert!(err.message.contains("between 1 and 60"));
    assert_eq!(state.water_commands(), 0);
}

#[tokio::test]
async fn turn_on_timer_rejects_sixty_one_seconds() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/switchbot/turn-on-timer",
            r#"{"device_name":"pump","timer_seconds":61}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn turn_on_timer_unknown_device_is_not_found() {
    let state = ServiceState::new();
    let app = app_with_state(state.clone());

    let resp = app
        .oneshot(json_request(
            "POST",
            "/switchbot/turn-on-timer",
            r#"{"device_name":"sprinkler","timer_seconds":5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.message, "device not found");
    assert_eq!(state.water_commands(), 0);
}

#[tokio::test]
async fn turn_on_timer_rejects_malformed_body() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/switchbot/turn-on-timer",
            r#"{"device_name":"pump"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
