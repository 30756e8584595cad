/*
[INPUT]:  Verifier endpoint URL, timeouts, and a (address, message, signature) triple
[OUTPUT]: Verdict from the remote verification service
[POS]:    Verifier layer - delegates signature checks to a host service
[UPDATE]: When the verification endpoint contract changes
*/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AuthError, Result};
use crate::verifier::SignatureVerifier;

/// HTTP verifier configuration
#[derive(Debug, Clone)]
pub struct HttpVerifierConfig {
    pub url: Url,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl HttpVerifierConfig {
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(url)?,
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        })
    }
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    address: &'a str,
    message: &'a str,
    signature: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    valid: bool,
}

/// Verifier that asks a remote service to check the signature.
///
/// Useful when the host environment owns verification (for example smart
/// contract wallets that need an RPC call).
#[derive(Debug, Clone)]
pub struct HttpSignatureVerifier {
    http_client: Client,
    url: Url,
}

impl HttpSignatureVerifier {
    pub fn new(config: HttpVerifierConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            url: config.url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SignatureVerifier for HttpSignatureVerifier {
    async fn verify(&self, address: &str, message: &str, signature: &str) -> Result<bool> {
        let body = VerifyRequest {
            address,
            message,
            signature,
        };

        let response = self
            .http_client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                url = %self.url,
                "remote verifier returned error status"
            );
            return Err(AuthError::RemoteStatus {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let verdict: VerifyResponse = serde_json::from_slice(&bytes)?;
        debug!(address, valid = verdict.valid, "remote verifier answered");
        Ok(verdict.valid)
    }
}
