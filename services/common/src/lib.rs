pub mod config;
pub mod health;
pub mod http;
pub mod shutdown;
pub mod telemetry;
