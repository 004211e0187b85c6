//! Error types for tc-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for tc-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tc-auth operations.
///
/// Error messages are sanitized to prevent accidental credential exposure.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the token endpoint could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Http(_))
    }
}

/// The kind of error that occurred.
///
/// Error messages avoid including credential values.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// OAuth error response from the token endpoint.
    #[error("OAuth error: {error} - {description}")]
    OAuth { error: String, description: String },

    /// Token endpoint answered 2xx but the body was unusable.
    #[error("Invalid token response: {0}")]
    InvalidTokenResponse(String),

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// HTTP transport error during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Token cache error.
    #[error("Token cache error: {0}")]
    Cache(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Sanitize the error message to avoid exposing URLs with tokens
        let message = err.to_string();
        let sanitized = if message.contains("access_token") || message.contains("client_secret") {
            "HTTP request failed (details redacted for security)".to_string()
        } else {
            message
        };
        Error::with_source(ErrorKind::Http(sanitized), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}

impl From<tcapi_client::Error> for Error {
    fn from(err: tcapi_client::Error) -> Self {
        let kind = match err.kind {
            tcapi_client::ErrorKind::Config(ref msg) => ErrorKind::Config(msg.clone()),
            _ => ErrorKind::Http("Client error (details redacted for security)".to_string()),
        };
        Error::with_source(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        let err = ErrorKind::OAuth {
            error: "invalid_client".to_string(),
            description: "client authentication failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "OAuth error: invalid_client - client authentication failed"
        );

        let err = ErrorKind::InvalidTokenResponse("missing access_token".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid token response: missing access_token"
        );
    }

    #[test]
    fn test_transport_classification() {
        assert!(Error::new(ErrorKind::Http("connection refused".into())).is_transport());
        assert!(!Error::new(ErrorKind::OAuth {
            error: "invalid_client".into(),
            description: String::new(),
        })
        .is_transport());
    }

    #[test]
    fn test_client_config_error_is_preserved() {
        let err: Error =
            tcapi_client::Error::new(tcapi_client::ErrorKind::Config("bad tls".into())).into();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }
}
