use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::config::RestConfig;

/// JSON REST client bound to a base URL.
///
/// Holds a shared `reqwest::Client` configured with the timeouts from
/// [`RestConfig`]. The client is cheap to clone and safe to use from many
/// tasks concurrently; it keeps no mutable state between calls.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    config: RestConfig,
    cancel: Option<CancellationToken>,
}

impl RestClient {
    /// Creates a new client from a base URL and a per-call timeout.
    ///
    /// The base URL is stored verbatim; each call's path is concatenated
    /// directly onto it, so the caller supplies any needed separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use restkit::RestClient;
    /// use std::time::Duration;
    ///
    /// # fn example() -> restkit::Result<()> {
    /// let client = RestClient::new("http://localhost:8888", Duration::from_secs(100))?;
    /// assert_eq!(client.base_url(), "http://localhost:8888");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_config(RestConfig::new(base_url, timeout))
    }

    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_config(config: RestConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            cancel: None,
        })
    }

    /// Attaches a cancellation token, consuming and returning the client.
    ///
    /// Every subsequent call races against the token; cancelling it aborts
    /// in-flight requests with a cancelled error.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use restkit::{CancellationToken, RestClient};
    /// use std::time::Duration;
    ///
    /// # fn example() -> restkit::Result<()> {
    /// let token = CancellationToken::new();
    /// let client = RestClient::new("http://localhost:8888", Duration::from_secs(30))?
    ///     .with_cancellation(token.clone());
    /// // token.cancel() aborts any call in progress
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Sets the cancellation token for this client.
    pub fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancel = Some(token);
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Internal: Returns reference to the underlying reqwest client.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Internal: Returns reference to the cancellation token, if attached.
    pub(crate) fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }
}
