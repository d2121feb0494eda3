//! restkit
//!
//! A minimal generic JSON REST client helper: [`RestClient`] wraps a shared
//! `reqwest` client with a fixed base URL and timeout, offers one convenience
//! call per HTTP verb plus a generic dispatch operation, serializes request
//! payloads to JSON, deserializes JSON responses into caller-supplied types,
//! and maps non-2xx responses to errors.
//!
//! # Features
//!
//! - **Type Safety**: request and response bodies are plain `serde` types
//! - **Async/Await**: built on tokio and reqwest
//! - **Error Handling**: comprehensive error types with `thiserror`
//! - **Observability**: structured `tracing` spans and events
//!
//! # Example
//!
//! ```rust,no_run
//! use restkit::prelude::*;
//! use std::time::Duration;
//!
//! #[derive(serde::Deserialize)]
//! struct Item {
//!     id: u64,
//!     name: String,
//! }
//!
//! # async fn example() -> Result<()> {
//! let client = RestClient::new("http://localhost:8888", Duration::from_secs(30))?;
//! let item: Item = client.get("/items/1", None).await?;
//! println!("{} = {}", item.id, item.name);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

// Re-exports of external dependencies
pub use reqwest;
pub use serde;
pub use serde_json;

// Core modules
pub mod error;
pub mod logging;
pub mod rest_client;

// Re-exports of core types for convenience
pub use error::{ConfigError, ContextExt, Error, NetworkError, Result};
pub use rest_client::{Method, RestClient, RestConfig};
// Re-export CancellationToken for convenient access
pub use tokio_util::sync::CancellationToken;

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use restkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ContextExt, Error, Result};
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, init_logging, try_init_logging};
    pub use crate::rest_client::{Method, RestClient, RestConfig};
    pub use reqwest::header::{HeaderMap, HeaderValue};
    pub use serde::{Deserialize, Serialize};
    pub use tokio_util::sync::CancellationToken;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "restkit");
    }
}
