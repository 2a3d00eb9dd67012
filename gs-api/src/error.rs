/// Error types for backend calls
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure, timeout, or an undecodable response body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("backend returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The configured base URL cannot be used
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Pull a readable message out of an error body.
///
/// The backend reports failures as `{"detail": ...}`, where `detail` is a
/// string for handled errors and a list for validation errors.
pub(crate) fn detail_from_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body.trim().to_string(),
        },
        _ => body.trim().to_string(),
    }
}
