//! HTTP response handling.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Check if the response was successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Check if the response has no content (204).
    pub fn is_no_content(&self) -> bool {
        self.status() == 204
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }

    /// Read the body as a generic JSON tree.
    ///
    /// An empty (or whitespace-only) body yields an empty JSON object, which
    /// is how "success, no content" responses are represented.
    pub async fn json_value(self) -> Result<serde_json::Value> {
        let body = self.bytes().await?;
        parse_json_body(&body)
    }

    /// Get the inner reqwest::Response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

/// Parse a raw body into JSON, mapping an empty body to `{}`.
pub(crate) fn parse_json_body(body: &[u8]) -> Result<serde_json::Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(Into::into)
}

/// Parse an error response body and convert to the appropriate error kind.
pub(crate) fn parse_error_response(status: u16, body: &str) -> Error {
    // JSON:API error documents: {"errors": [{"status", "title", "detail"}]}
    if let Ok(doc) = serde_json::from_str::<ApiErrorDocument>(body) {
        if let Some(err) = doc.errors.into_iter().next() {
            let status = err
                .status
                .as_deref()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(status);
            return Error::new(ErrorKind::Api {
                status,
                title: sanitize_error_message(&err.title.unwrap_or_default()),
                detail: sanitize_error_message(&err.detail.unwrap_or_default()),
            });
        }
    }

    let sanitized = sanitize_error_message(body);
    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        403 => ErrorKind::Authorization(sanitized),
        404 => ErrorKind::NotFound(sanitized),
        _ => ErrorKind::Http {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

/// Sanitize an error message to prevent exposing credentials.
///
/// - Redacts bearer tokens and `access_token`/`client_secret` values
/// - Truncates messages longer than 500 characters
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let bearer = regex_lite::Regex::new(r"(?i)bearer\s+[A-Za-z0-9\-._~+/]+=*").unwrap();
    let mut sanitized = bearer
        .replace_all(message, "Bearer [REDACTED]")
        .to_string();

    let secrets =
        regex_lite::Regex::new(r#"(access_token|client_secret)("?\s*[:=]\s*"?)[^"&\s,}]+"#)
            .unwrap();
    sanitized = secrets
        .replace_all(&sanitized, "$1$2[REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDocument {
    errors: Vec<ApiErrorObject>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorObject {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}
