//! Network-related error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Encapsulated network errors hiding implementation details.
///
/// This type wraps all transport-layer errors without exposing third-party
/// library types (like `reqwest::Error`) in the public API. This ensures
/// API stability even when the underlying HTTP library changes.
///
/// # Example
///
/// ```rust
/// use restkit::error::NetworkError;
///
/// fn describe(err: &NetworkError) -> String {
///     match err {
///         NetworkError::ConnectionFailed(msg) => format!("connect: {msg}"),
///         NetworkError::BodyRead(msg) => format!("read: {msg}"),
///         other => other.to_string(),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// DNS resolution failed.
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// SSL/TLS error.
    #[error("SSL/TLS error: {0}")]
    Ssl(String),

    /// The response body stream could not be fully read.
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// Opaque transport error for underlying issues.
    /// Uses `Box<dyn StdError>` to hide implementation details while preserving the source.
    #[error("Transport error")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),
}
