//! Error types for tc-rest.
//!
//! This is the taxonomy callers match on. Errors from the transport, auth
//! and mapping crates are folded into it, with the original error kept as
//! the source.

/// Result type alias for tc-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tc-rest operations.
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

    /// Returns true if a token could not be obtained.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication(_))
    }

    /// Returns true if no HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// HTTP status of a raised non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Http { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The token exchange was rejected or returned no usable token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Network failure, timeout, or unreadable response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx response, raised only when the ignore-status policy is off.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// A wire `type` the type registry cannot resolve.
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// The response body is not valid JSON or not a JSON:API document.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<tcapi_client::Error> for Error {
    fn from(err: tcapi_client::Error) -> Self {
        use tcapi_client::ErrorKind as Client;

        let kind = match &err.kind {
            k if k.is_transport() => ErrorKind::Transport(k.to_string()),
            Client::Http { status, message } => ErrorKind::Http {
                status: *status,
                message: message.clone(),
            },
            Client::Api {
                status,
                title,
                detail,
            } => ErrorKind::Http {
                status: *status,
                message: if detail.is_empty() {
                    title.clone()
                } else {
                    format!("{title}: {detail}")
                },
            },
            Client::Authentication(message)
            | Client::Authorization(message)
            | Client::NotFound(message) => ErrorKind::Http {
                status: err.status().unwrap_or_default(),
                message: message.clone(),
            },
            Client::Json(message) => ErrorKind::MalformedDocument(message.clone()),
            Client::InvalidUrl(message) | Client::Config(message) => {
                ErrorKind::Config(message.clone())
            }
            other => ErrorKind::Transport(other.to_string()),
        };

        Error::with_source(kind, err)
    }
}

impl From<tcapi_auth::Error> for Error {
    fn from(err: tcapi_auth::Error) -> Self {
        use tcapi_auth::ErrorKind as Auth;

        let kind = match &err.kind {
            _ if err.is_transport() => ErrorKind::Transport(err.to_string()),
            Auth::EnvVar(_) | Auth::Config(_) => ErrorKind::Config(err.to_string()),
            _ => ErrorKind::Authentication(err.to_string()),
        };

        Error::with_source(kind, err)
    }
}

impl From<tcapi_jsonapi::Error> for Error {
    fn from(err: tcapi_jsonapi::Error) -> Self {
        use tcapi_jsonapi::ErrorKind as JsonApi;

        let kind = match &err.kind {
            JsonApi::UnknownResourceType(t) => ErrorKind::UnknownResourceType(t.clone()),
            JsonApi::MalformedDocument(m) => ErrorKind::MalformedDocument(m.clone()),
        };

        Error::with_source(kind, err)
    }
}
