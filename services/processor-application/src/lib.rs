//! Task processor service.
//!
//! Exposes a liveness probe on `GET /health`. The router is built by
//! [`http::router::create_router`] so it can be served by the binary or driven
//! directly in tests.

pub mod application;
pub mod http;
