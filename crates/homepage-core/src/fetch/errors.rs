use crate::errors::HomepageError;
use crate::resources::ResourceKind;

/// Why a resource could not be fetched.
///
/// The render layer treats every variant the same way (no update); the
/// distinction exists for logging.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to '{url}' timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u128 },

    #[error("Request to '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("{kind} response is not valid JSON: {message}")]
    Decode { kind: ResourceKind, message: String },

    #[error("{kind} payload is missing field '{field}'")]
    Incomplete {
        kind: ResourceKind,
        field: &'static str,
    },

    #[error("{kind} payload has invalid field '{field}': {value}")]
    InvalidField {
        kind: ResourceKind,
        field: &'static str,
        value: String,
    },

    #[error("{kind} payload reported status {code}, expected 200")]
    Sentinel { kind: ResourceKind, code: i64 },
}

impl HomepageError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "FETCH_INVALID_URL",
            FetchError::Transport { .. } => "FETCH_TRANSPORT",
            FetchError::Timeout { .. } => "FETCH_TIMEOUT",
            FetchError::HttpStatus { .. } => "FETCH_HTTP_STATUS",
            FetchError::Decode { .. } => "FETCH_DECODE",
            FetchError::Incomplete { .. } => "FETCH_INCOMPLETE",
            FetchError::InvalidField { .. } => "FETCH_INVALID_FIELD",
            FetchError::Sentinel { .. } => "FETCH_SENTINEL",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, FetchError::InvalidUrl { .. })
    }
}

impl FetchError {
    /// Failures of the connection itself, as opposed to a bad response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Transport { .. } | FetchError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_display() {
        let error = FetchError::Sentinel {
            kind: ResourceKind::Weather,
            code: 404,
        };
        assert_eq!(
            error.to_string(),
            "weather payload reported status 404, expected 200"
        );
        assert_eq!(error.error_code(), "FETCH_SENTINEL");
        assert!(!error.is_transport());
    }

    #[test]
    fn test_timeout_is_transport() {
        let error = FetchError::Timeout {
            url: "http://localhost:8000/get/image".to_string(),
            timeout_ms: 250,
        };
        assert!(error.is_transport());
        assert_eq!(error.error_code(), "FETCH_TIMEOUT");
        assert!(error.to_string().ends_with("timed out after 250ms"));
    }
}
