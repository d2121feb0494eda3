//! Error handling for restkit.
//!
//! Strongly-typed errors built with `thiserror`, following the same
//! conventions throughout:
//!
//! 1. **API Stability**: public enums use `#[non_exhaustive]`
//! 2. **Zero Panic**: no `unwrap()` or `expect()` on recoverable paths
//! 3. **Context Rich**: error chain support with context attachment
//! 4. **Performance**: `Cow<'static, str>` messages, boxed large variants
//! 5. **Thread Safety**: all error types are `Send + Sync + 'static`
//!
//! Every error is returned immediately to the caller; the client performs no
//! internal recovery or retry.
//!
//! # Quick Start
//!
//! ```rust
//! use restkit::error::{Error, Result};
//!
//! fn check_path(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(Error::invalid_url("path cannot be empty"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Handling Specific Error Kinds
//!
//! ```rust
//! use restkit::error::Error;
//!
//! fn handle_error(err: &Error) {
//!     if let Some(status) = err.status_code() {
//!         println!("server said {status}");
//!     } else if err.is_transport() {
//!         println!("network trouble: {}", err.report());
//!     }
//! }
//! ```

mod config;
mod context;
mod convert;
mod network;

use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

pub use config::ConfigError;
pub use context::ContextExt;
pub use network::NetworkError;

pub(crate) use convert::truncate_message;

/// Result type alias for all restkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type for the restkit library.
///
/// Design constraints:
/// - Large variants are boxed to keep the enum small
/// - Uses `Cow<'static, str>` for zero-allocation static strings
///
/// # Example
///
/// ```rust
/// use restkit::error::Error;
///
/// let err = Error::http_status(404, "Not Found");
/// assert!(err.to_string().contains("404"));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Network-related errors encapsulating transport layer issues.
    /// Boxed to reduce enum size.
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// The server responded with a status outside the 200-299 range.
    ///
    /// Carries the numeric code and the canonical status text; the response
    /// body is discarded on this path.
    #[error("HTTP error ({status}): {text}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Canonical status text (e.g. "Not Found")
        text: Cow<'static, str>,
    },

    /// The composed request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(Cow<'static, str>),

    /// A method outside the fixed GET/POST/PUT/DELETE set was supplied.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(Cow<'static, str>),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be deserialized into the target type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The call exceeded the configured timeout.
    #[error("Timeout: {0}")]
    Timeout(Cow<'static, str>),

    /// The call was aborted through the attached `CancellationToken`.
    #[error("Cancelled: {0}")]
    Cancelled(Cow<'static, str>),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error with additional context, preserving the error chain.
    #[error("{context}")]
    Context {
        /// Context message describing what operation failed
        context: String,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a network error from a message.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(Box::new(NetworkError::ConnectionFailed(msg.into())))
    }

    /// Creates an HTTP status error from a code and its status text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use restkit::error::Error;
    ///
    /// let err = Error::http_status(500, "Internal Server Error");
    /// assert_eq!(err.status_code(), Some(500));
    /// ```
    pub fn http_status(status: u16, text: impl Into<Cow<'static, str>>) -> Self {
        Self::HttpStatus {
            status,
            text: text.into(),
        }
    }

    /// Creates an invalid URL error.
    /// Accepts both `&'static str` (zero allocation) and `String`.
    pub fn invalid_url(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Creates an unsupported method error carrying the offending method.
    pub fn unsupported_method(method: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedMethod(method.into())
    }

    /// Creates an encode error from the underlying serialization failure.
    pub fn encode(err: serde_json::Error) -> Self {
        Self::Encode(err)
    }

    /// Creates a decode error from the underlying deserialization failure.
    pub fn decode(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }

    /// Creates a timeout error.
    /// Accepts both `&'static str` (zero allocation) and `String`.
    pub fn timeout(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Creates a cancelled error.
    ///
    /// Use this when a call is aborted via a `CancellationToken`.
    pub fn cancelled(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Cancelled(msg.into())
    }

    // ==================== Context Methods ====================

    /// Attaches context to an existing error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use restkit::error::Error;
    ///
    /// let err = Error::network("Connection refused")
    ///     .context("Failed to fetch /items");
    /// assert!(err.to_string().contains("/items"));
    /// ```
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    // ==================== Chain Traversal Methods ====================

    /// Internal helper: creates an iterator that traverses the error chain.
    /// Automatically penetrates Context layers.
    fn iter_chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| match err {
            Error::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    /// Returns the root cause of the error, skipping Context layers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        self.iter_chain().last().unwrap_or(self)
    }

    /// Generates a detailed error report with the full chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use restkit::error::Error;
    ///
    /// let err = Error::network("Connection refused")
    ///     .context("Failed to fetch /items");
    /// let report = err.report();
    /// assert!(report.contains("Caused by"));
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        use std::fmt::Write;
        let mut report = String::new();
        report.push_str(&self.to_string());

        let mut current: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = current {
            let _ = write!(report, "\nCaused by: {err}");
            current = err.source();
        }
        report
    }

    // ==================== Helper Methods (Context Penetrating) ====================

    /// Checks if this error originates from the transport layer
    /// (penetrates Context layers).
    ///
    /// Returns `true` for network failures, timeouts, and cancellation.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Network(_) | Error::Timeout(_) | Error::Cancelled(_) => true,
            Error::Context { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if this is a status error
    /// (penetrates Context layers).
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Context { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Checks if this is a cancelled error (penetrates Context layers).
    /// Returns the error message.
    #[must_use]
    pub fn as_cancelled(&self) -> Option<&str> {
        match self {
            Error::Cancelled(msg) => Some(msg.as_ref()),
            Error::Context { source, .. } => source.as_cancelled(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
