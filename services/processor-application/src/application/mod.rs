pub mod config;
pub mod context;

pub const APPLICATION_NAME: &str = env!("CARGO_PKG_NAME");
pub const APPLICATION_VERSION: &str = env!("CARGO_PKG_VERSION");
