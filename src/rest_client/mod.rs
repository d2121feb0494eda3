//! REST client abstraction layer
//!
//! Provides a small JSON request/response interface over a shared `reqwest`
//! client with support for:
//! - Per-verb convenience calls (GET/POST/PUT/DELETE)
//! - Generic dispatch with runtime method, query parameters, and optional body
//! - Timeout control for the whole call
//! - Cooperative cancellation via `CancellationToken`
//! - Request and response logging with structured tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use restkit::rest_client::{RestClient, RestConfig};
//! use std::time::Duration;
//!
//! # async fn example() -> restkit::Result<()> {
//! let client = RestClient::new("https://example.com/api", Duration::from_secs(30))?;
//! let value: serde_json::Value = client.get("/status", None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Every call is independent and stateless relative to other calls: the
//! client holds no mutable request-scoped state and may be cloned and used
//! concurrently.

mod builder;
mod config;
mod method;
mod request;
mod response;

#[cfg(test)]
mod tests;

pub use builder::RestClient;
pub use config::RestConfig;
pub use method::Method;
