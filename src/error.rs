//! Error types shared by services, hooks and components.

use crate::policy::PolicyError;
use crate::utils::StorageError;

/// Input problems caught before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Invalid date and time: '{0}'")]
    InvalidDateTime(String),

    #[error("Please use YYYY-YY format (Example: 2024-25)")]
    InvalidYear(String),

    #[error("Please upload an Excel file.")]
    MissingFile,

    #[error("Only .xlsx or .xls files are accepted (got '{0}')")]
    UnsupportedFile(String),

    #[error("Please enter a valid authentication code")]
    EmptyPassword,

    #[error("Please enter a valid security code")]
    EmptyOtp,

    #[error("Admin session is not authorized")]
    NotAuthorized,
}

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// 401 / 403: the session is no longer valid
    #[error("Unauthorized: invalid or expired token (HTTP {0})")]
    Unauthorized(u16),

    /// Non-2xx with a JSON `message`
    #[error("{message}")]
    Business { status: u16, message: String },

    /// Non-2xx without a usable JSON body
    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// 401/403 responses force a logout; nothing else does
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(status)
            | ApiError::Business { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Maps a non-2xx response to an error. Auth failures ignore the body.
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized(status);
    }

    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty());

    match message {
        Some(message) => ApiError::Business { status, message },
        None => {
            let detail = body.trim();
            ApiError::Server {
                status,
                detail: if detail.is_empty() {
                    format!("HTTP error! status: {}", status)
                } else {
                    detail.to_string()
                },
            }
        }
    }
}
