use crate::application::config::ApplicationConfig;
use crate::processor::model::ModuleStatus;
use crate::processor::processor_client::ProcessorClient;
use anyhow::Result;

/// The processors polled by the gateway, in configuration order.
pub struct ProcessorRegistry {
    processors: Vec<ProcessorClient>,
}

impl ProcessorRegistry {
    pub fn new(config: &ApplicationConfig) -> Result<Self> {
        tracing::debug!("Initializing the processor registry");

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let processors = config
            .processors()
            .iter()
            .map(|endpoint| ProcessorClient::new(endpoint, http_client.clone()))
            .collect();

        Ok(Self { processors })
    }

    pub fn processors(&self) -> &[ProcessorClient] {
        &self.processors
    }

    /// Polls every processor concurrently; the result keeps configuration order.
    pub async fn check_all(&self) -> Vec<(&str, ModuleStatus)> {
        let checks = self.processors.iter().map(|processor| async move {
            (processor.module(), processor.check_health().await)
        });

        futures::future::join_all(checks).await
    }
}
