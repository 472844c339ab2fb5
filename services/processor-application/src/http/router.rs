use crate::application::APPLICATION_NAME;
use crate::http::health_check_controller::HealthCheckController;
use axum::Router;
use axum::routing::get;
use common::http::fallback_controller::FallbackController;
use tower_http::trace::DefaultMakeSpan;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().include_headers(true));

    // Construct the routes
    Router::new()
        .route(
            "/health",
            get(HealthCheckController::get_status_endpoint_handler),
        )
        .fallback(FallbackController::fallback_endpoint_handler(
            &opentelemetry::global::meter(APPLICATION_NAME),
        ))
        .layer(trace_layer)
}
