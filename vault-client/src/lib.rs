//! Typed HTTP API client for HashiCorp Vault.
//!
//! Models the Vault REST surface as async method calls: secret
//! read/write/list/delete, auth backend configuration and login, and
//! response wrapping/unwrapping. Requests are serialized and responses
//! deserialized into typed envelopes; everything else is the server's
//! business.
//!
//! ```no_run
//! use vault_client::{VaultClient, VaultConfig};
//! use std::collections::HashMap;
//!
//! # async fn example() -> vault_client::VaultResult<()> {
//! let client = VaultClient::new(
//!     VaultConfig::new("http://127.0.0.1:8200").with_token("s.abc123"),
//! )?;
//!
//! let secret = client
//!     .secret()
//!     .read::<HashMap<String, String>>("secret/my-app")
//!     .await?;
//! println!("lease: {}s", secret.lease_duration);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod sys;
pub mod util;

pub use client::VaultClient;
pub use config::VaultConfig;
pub use endpoint::Endpoint;
pub use error::{VaultError, VaultResult};
pub use models::{AuthInfo, Secret, SecretData, WrapInfo, WrappedSecret};
pub use sys::SysEndpoint;
