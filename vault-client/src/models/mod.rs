//! Typed request and response models for the Vault HTTP API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

pub mod auth;

/// Untyped secret payload for callers that do not want a dedicated type.
pub type SecretData = HashMap<String, serde_json::Value>;

/// Generic response envelope returned by most Vault read and write
/// operations, pairing a payload type with service metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret<T> {
    /// Request identifier assigned by the server
    #[serde(default)]
    pub request_id: String,
    /// Lease ID, empty for non-leased secrets
    #[serde(default)]
    pub lease_id: String,
    /// Whether the lease is renewable
    #[serde(default)]
    pub renewable: bool,
    /// Lease duration in seconds
    #[serde(default)]
    pub lease_duration: u64,
    /// The payload
    pub data: T,
    /// Warnings attached by the server
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
    /// Wrapping details, present on wrapped responses
    #[serde(default)]
    pub wrap_info: Option<WrapInfo>,
    /// Auth details, present on login responses
    #[serde(default)]
    pub auth: Option<AuthInfo>,
}

/// Response envelope for a response-wrapped read: the payload is replaced
/// by a one-time-use wrapping token.
#[derive(Debug, Clone, Deserialize)]
pub struct WrappedSecret {
    /// Request identifier assigned by the server
    #[serde(default)]
    pub request_id: String,
    /// The wrapping token and its lifetime
    pub wrap_info: WrapInfo,
}

/// Wrapping token details.
#[derive(Debug, Clone, Deserialize)]
pub struct WrapInfo {
    /// The one-time-use wrapping token
    pub token: String,
    /// Wrapping token TTL in seconds
    pub ttl: u64,
    /// When the wrapping token was created
    pub creation_time: DateTime<Utc>,
    /// Path of the request that was wrapped
    #[serde(default)]
    pub creation_path: Option<String>,
    /// Accessor of the wrapped token, for wrapped token-creation responses
    #[serde(default)]
    pub wrapped_accessor: Option<String>,
}

/// Auth block returned by login operations.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthInfo {
    /// The client token issued by the auth backend
    pub client_token: String,
    /// Token accessor
    #[serde(default)]
    pub accessor: String,
    /// Policies attached to the token
    #[serde(default)]
    pub policies: Vec<String>,
    /// Policies contributed by the token itself
    #[serde(default)]
    pub token_policies: Vec<String>,
    /// Arbitrary metadata attached by the backend
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    /// Token lease duration in seconds
    #[serde(default)]
    pub lease_duration: u64,
    /// Whether the token is renewable
    #[serde(default)]
    pub renewable: bool,
}
