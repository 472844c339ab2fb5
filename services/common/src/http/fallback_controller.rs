use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use opentelemetry::metrics::Counter;
use opentelemetry::metrics::Meter;
use std::future::Ready;

pub struct FallbackController;

impl FallbackController {
    /// Builds the fallback handler of a service, counting its requests under `meter`.
    pub fn fallback_endpoint_handler(
        meter: &Meter,
    ) -> impl Fn(Request<Body>) -> Ready<(StatusCode, &'static str)> + Clone + Send + Sync + 'static
    {
        let fallback_counter = meter
            .u64_counter("http_server_fallback_requests")
            .with_description("Number of fallback requests")
            .build();

        move |req: Request<Body>| std::future::ready(Self::unexpected_route(&fallback_counter, &req))
    }

    #[tracing::instrument(skip_all)]
    fn unexpected_route(
        fallback_counter: &Counter<u64>,
        req: &Request<Body>,
    ) -> (StatusCode, &'static str) {
        tracing::warn!(
            "Unexpected route targeted: {} {}",
            req.method(),
            req.uri().path()
        );

        fallback_counter.add(1, &[]);

        (StatusCode::NOT_FOUND, "Unexpected route")
    }
}
