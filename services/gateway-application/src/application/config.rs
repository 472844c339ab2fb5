use common::config::parse_var_or_default;
use common::config::var_or_default;
use std::num::NonZeroU64;
use std::time::Duration;

/// A processor whose liveness is reported under `module`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorEndpoint {
    module: String,
    base_url: String,
}

impl ProcessorEndpoint {
    pub fn new(module: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            base_url: base_url.into(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationConfig {
    port: u16,
    processors: Vec<ProcessorEndpoint>,
    request_timeout: Duration,
}

impl ApplicationConfig {
    const PORT_ENV_VAR: &str = "PORT";
    const DEFAULT_PORT: u16 = 8080;

    const PYTHON_PROCESSOR_MODULE: &str = "python";
    const PYTHON_PROCESSOR_URL_ENV_VAR: &str = "PYTHON_PROCESSOR_URL";
    const DEFAULT_PYTHON_PROCESSOR_URL: &str = "http://localhost:8001";

    const NODEJS_PROCESSOR_MODULE: &str = "nodejs";
    const NODEJS_PROCESSOR_URL_ENV_VAR: &str = "NODEJS_PROCESSOR_URL";
    const DEFAULT_NODEJS_PROCESSOR_URL: &str = "http://localhost:8002";

    const PROCESSOR_TIMEOUT_MS_ENV_VAR: &str = "PROCESSOR_TIMEOUT_MS";
    const DEFAULT_PROCESSOR_TIMEOUT_MS: NonZeroU64 = NonZeroU64::new(5000).unwrap();

    pub const fn new(
        port: u16,
        processors: Vec<ProcessorEndpoint>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            port,
            processors,
            request_timeout,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let processors = vec![
            ProcessorEndpoint::new(
                Self::PYTHON_PROCESSOR_MODULE,
                var_or_default(
                    &lookup,
                    Self::PYTHON_PROCESSOR_URL_ENV_VAR,
                    Self::DEFAULT_PYTHON_PROCESSOR_URL,
                ),
            ),
            ProcessorEndpoint::new(
                Self::NODEJS_PROCESSOR_MODULE,
                var_or_default(
                    &lookup,
                    Self::NODEJS_PROCESSOR_URL_ENV_VAR,
                    Self::DEFAULT_NODEJS_PROCESSOR_URL,
                ),
            ),
        ];

        // Zero is not a valid timeout
        let timeout_ms = parse_var_or_default(
            &lookup,
            Self::PROCESSOR_TIMEOUT_MS_ENV_VAR,
            Self::DEFAULT_PROCESSOR_TIMEOUT_MS,
        );

        Self {
            port: parse_var_or_default(&lookup, Self::PORT_ENV_VAR, Self::DEFAULT_PORT),
            processors,
            request_timeout: Duration::from_millis(timeout_ms.get()),
        }
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    pub fn processors(&self) -> &[ProcessorEndpoint] {
        &self.processors
    }

    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
