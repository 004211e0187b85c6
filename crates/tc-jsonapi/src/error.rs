//! Error types for tc-jsonapi.

/// Result type alias for tc-jsonapi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for JSON:API mapping.
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

    /// Shorthand for a [`ErrorKind::MalformedDocument`] error.
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedDocument(message.into()))
    }
}

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A wire `type` that no domain variant accepts.
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// The body is not JSON or not a JSON:API document.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::MalformedDocument(err.to_string()), err)
    }
}
