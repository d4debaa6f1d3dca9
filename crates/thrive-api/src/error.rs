use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Error taxonomy for every call the client makes. Callers match on the
/// variant to pick the user-facing treatment: `Unauthorized` redirects to
/// login, `UnverifiedEmail` redirects to the verification page carrying the
/// email forward, `Validation` renders inline per field, everything else is
/// a dismissible message. Nothing here retries; a failed request requires
/// explicit user action.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not signed in or token rejected")]
    Unauthorized,

    #[error("email not verified: {email}")]
    UnverifiedEmail { email: String },

    #[error("validation failed")]
    Validation { errors: HashMap<String, Vec<String>> },

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response did not conform to expected schema: {0}")]
    Schema(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// The error envelope the API uses for non-2xx responses. Every field is
/// optional — older endpoints return bare messages.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, Vec<String>>>,
}

/// Map a non-2xx status and its body to an [`ApiError`]. This is the single
/// place the wire taxonomy is interpreted.
pub fn classify_error(status: u16, body: &[u8]) -> ApiError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    match status {
        401 => ApiError::Unauthorized,
        403 if parsed.reason.as_deref() == Some("email_unverified") => ApiError::UnverifiedEmail {
            email: parsed.email.unwrap_or_default(),
        },
        422 => ApiError::Validation {
            errors: parsed.errors.unwrap_or_default(),
        },
        _ => ApiError::Status {
            status,
            message: parsed
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        },
    }
}
