//! Client configuration.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Verify TLS certificates of the API host.
    pub verify_ssl: bool,
    /// Let non-2xx responses flow through to the caller instead of raising.
    ///
    /// Also sent to the API as the `X-TCAPI-Ignore-Status` header.
    pub ignore_status: bool,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// Accept gzip/deflate compressed responses.
    pub accept_compressed: bool,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            verify_ssl: true,
            ignore_status: true,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            accept_compressed: true,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `TCAPI_VERIFY_SSL` (default: true)
    /// - `TCAPI_IGNORE_STATUS` (default: true)
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(verify) = env_flag("TCAPI_VERIFY_SSL")? {
            builder = builder.with_verify_ssl(verify);
        }
        if let Some(ignore) = env_flag("TCAPI_IGNORE_STATUS")? {
            builder = builder.with_ignore_status(ignore);
        }

        Ok(builder.build())
    }

    /// Value sent in the `X-TCAPI-Ignore-Status` header.
    pub fn ignore_status_header_value(&self) -> &'static str {
        if self.ignore_status {
            "1"
        } else {
            "0"
        }
    }
}

/// Read a boolean flag from the environment. Unset or empty means `None`.
fn env_flag(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => parse_flag(&value).map(Some).ok_or_else(|| {
            Error::new(ErrorKind::Config(format!(
                "{name} must be a boolean (1/0, true/false, yes/no)"
            )))
        }),
        _ => Ok(None),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Enable or disable TLS certificate verification.
    pub fn with_verify_ssl(mut self, verify: bool) -> Self {
        self.config.verify_ssl = verify;
        self
    }

    /// Let non-2xx responses through (`true`) or raise on them (`false`).
    pub fn with_ignore_status(mut self, ignore: bool) -> Self {
        self.config.ignore_status = ignore;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Accept compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
