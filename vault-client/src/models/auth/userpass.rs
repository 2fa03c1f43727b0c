//! Userpass auth backend models.
//!
//! Users are written to `auth/userpass/users/{username}`; login happens
//! against `auth/userpass/login/{username}`.

use crate::util::csv_string;
use serde::Serialize;

/// Parameters for creating or updating a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserRequest {
    /// The user's password
    pub password: String,
    /// Policies attached to issued tokens; comma-separated on the wire
    #[serde(with = "csv_string", skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<String>,
    /// Issued token TTL, e.g. `"1h"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    /// Issued token maximum TTL, e.g. `"24h"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<String>,
}

/// Login payload for `auth/userpass/login/{username}`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// The user's password
    pub password: String,
}
