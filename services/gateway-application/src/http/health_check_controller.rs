use crate::application::APPLICATION_NAME;
use crate::application::context::SharedApplicationState;
use crate::http::model::AggregatedHealthResponse;
use crate::http::model::ModuleHealthResponse;
use axum::Json;
use axum::extract::State;
use std::sync::LazyLock;

static HEALTH_CHECK_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_health_check_requests")
        .with_description("Number of health check requests")
        .build()
});

pub struct HealthCheckController;

impl HealthCheckController {
    #[tracing::instrument(skip(state))]
    pub async fn get_status_endpoint_handler(
        State(state): State<SharedApplicationState>,
    ) -> Json<AggregatedHealthResponse> {
        tracing::info!("Getting the status of every processor");

        HEALTH_CHECK_COUNTER.add(1, &[]);

        let modules = state
            .processor_registry()
            .check_all()
            .await
            .into_iter()
            .map(|(module, status)| ModuleHealthResponse::new(module, status))
            .collect();

        Json(AggregatedHealthResponse::new(modules))
    }
}
