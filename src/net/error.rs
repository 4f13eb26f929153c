//! Error taxonomy for REST calls.
//!
//! Screens branch on the variant: `Network`/`Server` get a retry button,
//! `Auth` sends the user to login, `Validation` shows the backend's message
//! next to the form, and `Canceled` is not shown at all.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure below HTTP: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("unauthorized ({status}): {message}")]
    Auth { status: u16, message: String },
    #[error("{message}")]
    Validation { status: u16, message: String },
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request canceled")]
    Canceled,
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl ApiError {
    /// Classify a non-success status with the backend's message, if any.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = backend_message(body).unwrap_or_else(|| default_message(status));
        match status {
            401 | 403 => Self::Auth { status, message },
            400..=499 => Self::Validation { status, message },
            _ => Self::Server { status, message },
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Validation { status, .. } | Self::Server { status, .. } => {
                Some(*status)
            }
            Self::Network(_) | Self::Decode(_) | Self::Canceled => None,
        }
    }

    /// Text to show the user. Backend messages pass through as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { message, .. } | Self::Validation { message, .. } | Self::Server { message, .. } => {
                message.clone()
            }
            Self::Network(_) => "Could not reach the server. Please try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Canceled => String::new(),
        }
    }
}

/// Extract a human-readable message from an error body.
///
/// Priority: `detail` (a string, or a list of `{msg}` entries), `message`, `error`.
pub fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    if let Some(detail) = value.get("detail") {
        match detail {
            Value::String(s) if !s.trim().is_empty() => return Some(s.clone()),
            Value::Array(entries) => {
                let joined = entries
                    .iter()
                    .filter_map(|e| e.get("msg").and_then(Value::as_str).or_else(|| e.as_str()))
                    .collect::<Vec<_>>()
                    .join(", ");
                if !joined.is_empty() {
                    return Some(joined);
                }
            }
            _ => {}
        }
    }
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

fn default_message(status: u16) -> String {
    match status {
        401 | 403 => "Please log in again.".to_owned(),
        405 => "The server does not allow this request method. Check FOODTHING_API_BASE.".to_owned(),
        400..=499 => format!("request rejected: {status}"),
        _ => format!("server unavailable: {status}"),
    }
}
