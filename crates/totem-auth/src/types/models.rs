/*
[INPUT]:  Verification outcomes from the authenticator
[OUTPUT]: Serializable verification result and error codes
[POS]:    Data layer - protocol result records
[UPDATE]: When the error taxonomy changes
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reason a signed challenge was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationError {
    /// Cryptographic check failed
    InvalidSignature,
    /// Challenge text could not be parsed
    MalformedMessage,
    /// Challenge timestamp is older than the freshness window
    ExpiredMessage,
    /// Nonce was already consumed
    ReplayedNonce,
    /// The signature verifier itself failed
    VerificationError,
}

impl VerificationError {
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::InvalidSignature => "INVALID_SIGNATURE",
            VerificationError::MalformedMessage => "MALFORMED_MESSAGE",
            VerificationError::ExpiredMessage => "EXPIRED_MESSAGE",
            VerificationError::ReplayedNonce => "REPLAYED_NONCE",
            VerificationError::VerificationError => "VERIFICATION_ERROR",
        }
    }

    /// Whether the user should be asked to sign a freshly generated challenge
    pub fn requires_new_challenge(&self) -> bool {
        matches!(
            self,
            VerificationError::InvalidSignature | VerificationError::ExpiredMessage
        )
    }
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a single verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<VerificationError>,
}

impl VerificationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(error: VerificationError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
