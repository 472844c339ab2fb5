pub mod fallback_controller;
pub mod http_server;
