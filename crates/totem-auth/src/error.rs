/*
[INPUT]:  Error sources (HTTP verifier, serialization, key material, config)
[OUTPUT]: Structured infrastructure errors with retry hints
[POS]:    Error handling layer - unified error type for the crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Infrastructure error for the auth crate.
///
/// Protocol outcomes (expired, replayed, ...) are reported through
/// [`crate::VerificationResult`] and never through this type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// HTTP request to a remote verifier failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote verifier answered with a non-success status
    #[error("Verifier returned status {status}: {message}")]
    RemoteStatus { status: u16, message: String },

    /// Verifier could not complete the check
    #[error("Verifier error: {0}")]
    Verifier(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Private or public key material could not be decoded
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Signing a message failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            AuthError::Http(_) => true,
            AuthError::RemoteStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Result type alias for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let unavailable = AuthError::RemoteStatus {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert!(unavailable.is_retryable());

        let throttled = AuthError::RemoteStatus {
            status: 429,
            message: "slow down".to_string(),
        };
        assert!(throttled.is_retryable());

        let bad_request = AuthError::RemoteStatus {
            status: 400,
            message: "bad body".to_string(),
        };
        assert!(!bad_request.is_retryable());

        assert!(!AuthError::InvalidKey("short".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = AuthError::Config("missing url".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing url");
    }
}
