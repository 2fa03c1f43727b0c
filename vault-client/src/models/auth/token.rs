//! Token auth backend models.
//!
//! Tokens are created at `auth/token/create`, renewed at
//! `auth/token/renew`, and inspected at `auth/token/lookup`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters for creating a token.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTokenRequest {
    /// Explicit token ID; requires sudo capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Policies attached to the token
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<String>,
    /// Metadata visible in audit logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    /// Create an orphan token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_parent: Option<bool>,
    /// Do not attach the default policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_default_policy: Option<bool>,
    /// Whether the token may be renewed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewable: Option<bool>,
    /// TTL, e.g. `"1h"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    /// Hard TTL cap, e.g. `"24h"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_max_ttl: Option<String>,
    /// Display name suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Uses allowed, 0 for unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_uses: Option<u64>,
}

/// Parameters for renewing a token.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenewTokenRequest {
    /// Token to renew
    pub token: String,
    /// Requested extension in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment: Option<u64>,
}

/// Token details as returned by a lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    /// Token accessor
    #[serde(default)]
    pub accessor: String,
    /// Creation time as a Unix timestamp
    #[serde(default)]
    pub creation_time: u64,
    /// TTL the token was created with, in seconds
    #[serde(default)]
    pub creation_ttl: u64,
    /// Display name
    #[serde(default)]
    pub display_name: String,
    /// Hard TTL cap in seconds
    #[serde(default)]
    pub explicit_max_ttl: u64,
    /// Remaining uses, 0 for unlimited
    #[serde(default)]
    pub num_uses: u64,
    /// Whether the token has no parent
    #[serde(default)]
    pub orphan: bool,
    /// Path the token was created at
    #[serde(default)]
    pub path: String,
    /// Policies attached to the token
    #[serde(default)]
    pub policies: Vec<String>,
    /// Whether the token is renewable
    #[serde(default)]
    pub renewable: bool,
    /// Remaining TTL in seconds
    #[serde(default)]
    pub ttl: u64,
}
