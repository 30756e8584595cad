/*
[INPUT]:  YAML configuration file (explicit path or per-user default)
[OUTPUT]: Parsed CLI configuration and the verifier it selects
[POS]:    Configuration layer - authenticator setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use totem_auth::{
    AuthConfig,
    Chain,
    HttpSignatureVerifier,
    HttpVerifierConfig,
    SignatureVerifier,
    verifier_for_chain,
};

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Chain whose local verifier and signer are used
    #[serde(default)]
    pub chain: Chain,
    /// Authenticator limits
    #[serde(default)]
    pub auth: AuthConfig,
    /// Delegate signature checks to a remote service instead of verifying locally
    #[serde(default)]
    pub remote_verifier: Option<RemoteVerifierConfig>,
}

/// Remote verification service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteVerifierConfig {
    /// Endpoint receiving `{address, message, signature}` as JSON
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load the explicit path, else the default path if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Build the signature verifier this configuration selects
    pub fn build_verifier(&self) -> Result<Arc<dyn SignatureVerifier>> {
        match &self.remote_verifier {
            Some(remote) => {
                let mut http_config =
                    HttpVerifierConfig::new(&remote.url).context("remote verifier url")?;
                http_config.timeout = Duration::from_secs(remote.timeout_secs);
                let verifier =
                    HttpSignatureVerifier::new(http_config).context("build remote verifier")?;
                Ok(Arc::new(verifier))
            }
            None => Ok(verifier_for_chain(self.chain)),
        }
    }
}

/// `<config_dir>/founders-totem/auth.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("founders-totem").join("auth.yaml"))
}
