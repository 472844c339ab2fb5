use crate::application::APPLICATION_NAME;
use crate::application::config::ProcessorEndpoint;
use crate::processor::model::ModuleStatus;
use crate::processor::model::ProcessorHealthResponse;
use anyhow::Result;
use std::sync::LazyLock;

static PROCESSOR_HEALTH_FAILURE_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> =
    LazyLock::new(|| {
        opentelemetry::global::meter(APPLICATION_NAME)
            .u64_counter("gateway_processor_health_failures")
            .with_description("Number of processor health checks reported as failed")
            .build()
    });

pub struct ProcessorClient {
    module: String,
    health_url: String,
    http_client: reqwest::Client,
}

impl ProcessorClient {
    const HEALTH_PATH: &str = "/health";

    pub fn new(endpoint: &ProcessorEndpoint, http_client: reqwest::Client) -> Self {
        let health_url = format!(
            "{}{}",
            endpoint.base_url().trim_end_matches('/'),
            Self::HEALTH_PATH
        );

        Self {
            module: endpoint.module().to_string(),
            health_url,
            http_client,
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// Calls the processor's health endpoint. Non-2xx answers are errors.
    pub async fn health(&self) -> Result<ProcessorHealthResponse> {
        let response = self
            .http_client
            .get(&self.health_url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ProcessorHealthResponse>().await?)
    }

    #[tracing::instrument(skip(self), fields(module = %self.module, url = %self.health_url))]
    pub async fn check_health(&self) -> ModuleStatus {
        let status = match self.health().await {
            Ok(health) if health.is_success() => ModuleStatus::Success,
            Ok(health) => {
                tracing::error!(
                    "The {} processor reported an unhealthy code: {:?}",
                    self.module,
                    health.code()
                );
                ModuleStatus::Fail
            }
            Err(err) => {
                tracing::error!("Failed to call {} processor health check: {err:#}", self.module);
                ModuleStatus::Fail
            }
        };

        if status == ModuleStatus::Fail {
            PROCESSOR_HEALTH_FAILURE_COUNTER.add(
                1,
                &[opentelemetry::KeyValue::new("module", self.module.clone())],
            );
        }

        status
    }
}
