use crate::error::ConfigError;
use std::time::Duration;

/// REST client configuration
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL prefixed to every request path, stored verbatim
    /// (no trailing-slash normalization).
    pub base_url: String,
    /// Total per-call timeout, covering the whole request/response cycle
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Default User-Agent header value
    pub user_agent: String,
    /// Maximum number of idle connections per host in the connection pool
    pub pool_max_idle_per_host: usize,
    /// Timeout for idle connections in the pool
    pub pool_idle_timeout: Duration,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("restkit/", env!("CARGO_PKG_VERSION")).to_string(),
            pool_max_idle_per_host: 10,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl RestConfig {
    /// Creates a configuration from the two values every client needs:
    /// the base URL and the per-call timeout. Everything else defaults.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            ..Self::default()
        }
    }

    /// Validates the configuration parameters.
    ///
    /// # Validation Rules
    ///
    /// - `base_url` must be non-empty
    /// - `timeout` must be non-zero and at most 5 minutes
    ///
    /// # Example
    ///
    /// ```rust
    /// use restkit::rest_client::RestConfig;
    /// use std::time::Duration;
    ///
    /// let config = RestConfig::new("http://localhost:8888", Duration::from_secs(30));
    /// assert!(config.validate().is_ok());
    ///
    /// let invalid = RestConfig::new("http://localhost:8888", Duration::from_secs(600));
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let max_timeout = Duration::from_secs(300);

        if self.base_url.is_empty() {
            return Err(ConfigError::invalid("base_url", "cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::invalid("timeout", "cannot be zero"));
        }

        if self.timeout > max_timeout {
            return Err(ConfigError::too_high(
                "timeout",
                format!("{:?}", self.timeout),
                "5 minutes",
            ));
        }

        Ok(())
    }
}
