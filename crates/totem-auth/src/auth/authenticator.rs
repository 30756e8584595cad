/*
[INPUT]:  Signature verifier, nonce ledger, claimed address, signed challenge text
[OUTPUT]: VerificationResult (valid or a single rejection code)
[POS]:    Auth layer - orchestrates the complete verification flow
[UPDATE]: When verification steps or their order change
*/

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::auth::challenge::{self, Challenge};
use crate::config::AuthConfig;
use crate::ledger::{self, NonceStore};
use crate::types::{VerificationError, VerificationResult};
use crate::verifier::SignatureVerifier;

/// Verifies signed challenges with freshness and single-use enforcement
#[derive(Clone)]
pub struct Authenticator {
    verifier: Arc<dyn SignatureVerifier>,
    ledger: Arc<dyn NonceStore>,
    config: AuthConfig,
}

impl Authenticator {
    /// Create an authenticator with default limits
    pub fn new(verifier: Arc<dyn SignatureVerifier>, ledger: Arc<dyn NonceStore>) -> Self {
        Self::with_config(verifier, ledger, AuthConfig::default())
    }

    pub fn with_config(
        verifier: Arc<dyn SignatureVerifier>,
        ledger: Arc<dyn NonceStore>,
        config: AuthConfig,
    ) -> Self {
        Self {
            verifier,
            ledger,
            config,
        }
    }

    /// Create an authenticator that owns the ledger described by `config`
    pub fn from_config(verifier: Arc<dyn SignatureVerifier>, config: AuthConfig) -> Self {
        let ledger = ledger::ledger_from_config(&config);
        Self::with_config(verifier, ledger, config)
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Get the nonce ledger
    pub fn ledger(&self) -> &Arc<dyn NonceStore> {
        &self.ledger
    }

    /// Generate a fresh challenge for `address`
    pub fn issue_challenge(&self, address: &str) -> Challenge {
        let challenge = challenge::generate_challenge(address);
        debug!(address, nonce = %challenge.nonce, "issued challenge");
        challenge
    }

    /// Verify a signed challenge against the current wall-clock time
    pub async fn verify(
        &self,
        address: &str,
        message: &str,
        signature: &str,
    ) -> VerificationResult {
        self.verify_at(address, message, signature, Utc::now().timestamp_millis())
            .await
    }

    /// Verify a signed challenge as of `now_ms` (milliseconds since epoch)
    ///
    /// 1. Check the signature
    /// 2. Parse nonce and timestamp from the text
    /// 3. Reject challenges older than the freshness window
    /// 4. Consume the nonce, rejecting replays
    pub async fn verify_at(
        &self,
        address: &str,
        message: &str,
        signature: &str,
        now_ms: i64,
    ) -> VerificationResult {
        match self.verifier.verify(address, message, signature).await {
            Ok(true) => {}
            Ok(false) => return reject(address, VerificationError::InvalidSignature),
            Err(err) => {
                warn!(address, error = %err, "signature verifier failed");
                return reject(address, VerificationError::VerificationError);
            }
        }

        let Some(parsed) = challenge::parse_challenge(message) else {
            return reject(address, VerificationError::MalformedMessage);
        };

        // Future timestamps are accepted; only the upper age bound is enforced.
        let age_ms = now_ms.saturating_sub(parsed.timestamp);
        if age_ms > 0 && age_ms as u64 > self.config.freshness_window_ms {
            debug!(address, age_ms, "challenge outside freshness window");
            return reject(address, VerificationError::ExpiredMessage);
        }

        let retain_for = self.retention(parsed.timestamp, now_ms);
        if !self.ledger.try_consume_for(&parsed.nonce, retain_for) {
            return reject(address, VerificationError::ReplayedNonce);
        }

        info!(address, nonce = %parsed.nonce, "wallet authenticated");
        VerificationResult::ok()
    }
}

impl Authenticator {
    /// Time until a challenge issued at `timestamp` leaves the freshness
    /// window, and never less than the window itself.
    fn retention(&self, timestamp: i64, now_ms: i64) -> Duration {
        let window_ms = self.config.freshness_window_ms;
        let remaining_ms = timestamp
            .saturating_add(i64::try_from(window_ms).unwrap_or(i64::MAX))
            .saturating_sub(now_ms);
        let remaining_ms = u64::try_from(remaining_ms).unwrap_or(0);
        Duration::from_millis(remaining_ms.max(window_ms))
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("config", &self.config)
            .field("ledger_len", &self.ledger.len())
            .finish()
    }
}

fn reject(address: &str, error: VerificationError) -> VerificationResult {
    info!(address, error = %error, "wallet authentication rejected");
    VerificationResult::rejected(error)
}
