//! Vault client configuration.

use crate::error::{VaultError, VaultResult};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Vault client configuration.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault server address
    pub addr: String,
    /// Client token sent as `X-Vault-Token`
    pub token: Option<SecretString>,
    /// Request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            addr: std::env::var("VAULT_ADDR")
                .unwrap_or_else(|_| "http://127.0.0.1:8200".to_string()),
            token: std::env::var("VAULT_TOKEN").ok().map(SecretString::from),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("vault-client-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl VaultConfig {
    /// Create a new configuration for the given server address.
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ..Default::default()
        }
    }

    /// Set the client token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the address and return it without any trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] when the address is not a
    /// valid absolute HTTP(S) URL.
    pub fn base_url(&self) -> VaultResult<String> {
        let url = Url::parse(&self.addr)
            .map_err(|e| VaultError::InvalidConfig(format!("invalid address: {e}")))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(VaultError::InvalidConfig(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        Ok(self.addr.trim_end_matches('/').to_string())
    }
}
