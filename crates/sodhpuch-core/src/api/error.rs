//! Errors returned by the API client.
//!
//! Every failure carries a one-line message meant for display on the page
//! that issued the request.

use std::fmt;

use serde_json::Value;

/// Categories of API failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Request never produced a response (connect, DNS, timeout, TLS)
    Transport,
    /// Server answered with a non-success status
    HttpStatus,
    /// Success status but the body did not match the expected shape
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Transport => write!(f, "transport"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// Human-readable message, shown as-is to the user
    pub message: String,
    /// HTTP status code, when the server answered
    pub status: Option<u16>,
}

impl ApiError {
    /// Creates a transport error from a reqwest failure.
    pub fn transport(err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Could not connect to the server".to_string()
        } else {
            format!("Network error: {err}")
        };
        Self {
            kind: ApiErrorKind::Transport,
            message,
            status: None,
        }
    }

    /// Creates an HTTP status error, preferring server-provided text.
    ///
    /// A JSON body of the form `{"detail": "..."}` yields the detail string,
    /// any other non-blank body is used trimmed, and an empty or whitespace-only
    /// body falls back to `fallback`.
    pub fn http_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| fallback.to_string());
        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            status: Some(status),
        }
    }

    /// Creates a parse error for a success response with an unexpected body.
    pub fn parse(what: &str, err: &serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: format!("Unexpected {what} response: {err}"),
            status: None,
        }
    }

    /// Returns true if the server rejected the credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(trimmed)
        && let Some(detail) = json.get("detail").and_then(Value::as_str)
        && !detail.trim().is_empty()
    {
        return Some(detail.trim().to_string());
    }

    Some(trimmed.to_string())
}
