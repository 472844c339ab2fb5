pub mod model;
pub mod processor_client;
pub mod processor_registry;
