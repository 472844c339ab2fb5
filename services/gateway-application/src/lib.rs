//! Task API gateway.
//!
//! Answers `GET /health` with the liveness of every configured processor,
//! polled concurrently on each request.

pub mod application;
pub mod http;
pub mod processor;
