//! End-to-end tests of the gateway's aggregated health check against real processors.

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use axum::routing::get;
use common::http::http_server::HttpServer;
use gateway_application::application::config::ApplicationConfig;
use gateway_application::application::config::ProcessorEndpoint;
use gateway_application::application::context::create_application_state;
use gateway_application::http::router::create_router;
use std::time::Duration;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt as _;

/// Serves `router` on an ephemeral local port until the returned token is cancelled.
async fn spawn_processor(router: Router) -> (String, CancellationToken) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let shutdown_token = CancellationToken::new();

    tokio::spawn(HttpServer::serve(listener, router, shutdown_token.clone()));

    (base_url, shutdown_token)
}

/// A base URL nothing listens on.
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base_url
}

fn gateway(processors: Vec<ProcessorEndpoint>) -> Router {
    gateway_with_timeout(processors, Duration::from_millis(500))
}

fn gateway_with_timeout(processors: Vec<ProcessorEndpoint>, request_timeout: Duration) -> Router {
    let config = ApplicationConfig::new(0, processors, request_timeout);
    create_router(create_application_state(&config).unwrap())
}

/// A processor answering success after `delay`.
fn delayed_processor(delay: Duration) -> Router {
    Router::new().route(
        "/health",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(serde_json::json!({"code": 0, "message": "success"}))
        }),
    )
}

async fn get_health(router: Router) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn every_processor_up_reports_success() {
    let (python_url, python_shutdown) =
        spawn_processor(processor_application::http::router::create_router()).await;
    let (nodejs_url, nodejs_shutdown) =
        spawn_processor(processor_application::http::router::create_router()).await;

    let (status, json) = get_health(gateway(vec![
        ProcessorEndpoint::new("python", python_url),
        ProcessorEndpoint::new("nodejs", nodejs_url),
    ]))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "code": 0,
            "data": [
                {"module": "python", "data": "success"},
                {"module": "nodejs", "data": "success"},
            ],
        })
    );

    python_shutdown.cancel();
    nodejs_shutdown.cancel();
}

#[tokio::test]
async fn unreachable_processor_reports_fail() {
    let (python_url, python_shutdown) =
        spawn_processor(processor_application::http::router::create_router()).await;

    let (status, json) = get_health(gateway(vec![
        ProcessorEndpoint::new("python", python_url),
        ProcessorEndpoint::new("nodejs", unreachable_url().await),
    ]))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 0);
    assert_eq!(json["data"][0]["module"], "python");
    assert_eq!(json["data"][0]["data"], "success");
    assert_eq!(json["data"][1]["module"], "nodejs");
    assert_eq!(json["data"][1]["data"], "fail");

    python_shutdown.cancel();
}

#[tokio::test]
async fn non_zero_code_reports_fail() {
    let busy = Router::new().route(
        "/health",
        get(|| async { Json(serde_json::json!({"code": 1, "message": "busy"})) }),
    );
    let (url, shutdown) = spawn_processor(busy).await;

    let (_, json) = get_health(gateway(vec![ProcessorEndpoint::new("python", url)])).await;

    assert_eq!(json["data"][0]["data"], "fail");

    shutdown.cancel();
}

#[tokio::test]
async fn numeric_string_code_reports_success() {
    let stringly = Router::new().route(
        "/health",
        get(|| async { Json(serde_json::json!({"code": "0", "message": "success"})) }),
    );
    let (url, shutdown) = spawn_processor(stringly).await;

    let (_, json) = get_health(gateway(vec![ProcessorEndpoint::new("python", url)])).await;

    assert_eq!(json["data"][0]["data"], "success");

    shutdown.cancel();
}

#[tokio::test]
async fn missing_code_reports_fail() {
    let legacy = Router::new().route(
        "/health",
        get(|| async { Json(serde_json::json!({"status": "UP"})) }),
    );
    let (url, shutdown) = spawn_processor(legacy).await;

    let (_, json) = get_health(gateway(vec![ProcessorEndpoint::new("python", url)])).await;

    assert_eq!(json["data"][0]["data"], "fail");

    shutdown.cancel();
}

#[tokio::test]
async fn error_status_reports_fail() {
    let broken = Router::new().route(
        "/health",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"code": 0, "message": "success"})),
            )
        }),
    );
    let (url, shutdown) = spawn_processor(broken).await;

    let (_, json) = get_health(gateway(vec![ProcessorEndpoint::new("python", url)])).await;

    assert_eq!(json["data"][0]["data"], "fail");

    shutdown.cancel();
}

#[tokio::test]
async fn processors_are_polled_concurrently() {
    let (python_url, python_shutdown) =
        spawn_processor(delayed_processor(Duration::from_millis(400))).await;
    let (nodejs_url, nodejs_shutdown) =
        spawn_processor(delayed_processor(Duration::from_millis(400))).await;

    let router = gateway_with_timeout(
        vec![
            ProcessorEndpoint::new("python", python_url),
            ProcessorEndpoint::new("nodejs", nodejs_url),
        ],
        Duration::from_secs(2),
    );

    let started = Instant::now();
    let (status, json) = get_health(router).await;
    let elapsed = started.elapsed();

    assert_eq!(status, StatusCode::OK);
    assert!(elapsed < Duration::from_millis(700), "took {elapsed:?}");
    assert_eq!(
        json["data"],
        serde_json::json!([
            {"module": "python", "data": "success"},
            {"module": "nodejs", "data": "success"},
        ])
    );

    python_shutdown.cancel();
    nodejs_shutdown.cancel();
}

#[tokio::test]
async fn slow_processor_times_out_as_fail() {
    let (url, shutdown) = spawn_processor(delayed_processor(Duration::from_secs(5))).await;

    let (status, json) =
        get_health(gateway(vec![ProcessorEndpoint::new("python", url)])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["data"], "fail");

    shutdown.cancel();
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = gateway(vec![])
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
