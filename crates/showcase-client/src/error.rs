//! Failure taxonomy for backend calls.

/// Result type for showcase-client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the API client.
///
/// Every failure a call can produce is one of these; callers convert them to
/// view-local state and never let them escape to a crash path.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request never reached the server or produced no response.
    #[error("request failed: {0}")]
    Transport(String),

    /// Server answered with something that is not JSON.
    #[error("Server returned non-JSON response: {body}")]
    NonJson { status: u16, body: String },

    /// HTTP error status; `message` is the body's error/message field when
    /// present, otherwise a generic status line.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Credential store could not be read or written.
    #[error("credential store error: {0}")]
    Store(String),

    /// Configuration error (bad base URL, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// True when the failure means the bearer credential was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_detection() {
        let unauthorized = ApiError::Http {
            status: 401,
            message: "invalid token".to_string(),
        };
        assert!(unauthorized.is_auth_error());

        let not_found = ApiError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert!(!not_found.is_auth_error());
        assert!(!ApiError::Transport("timeout".to_string()).is_auth_error());
    }
}
