//! AppRole auth backend models.
//!
//! Roles are written to `auth/approle/role/{name}`; secret IDs are minted
//! at `auth/approle/role/{name}/secret-id`; login happens against
//! `auth/approle/login`.

use crate::util::csv_string;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters for creating or updating an AppRole role.
///
/// List-valued fields travel as comma-separated strings on the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleRequest {
    /// Require a secret ID when logging in
    pub bind_secret_id: bool,
    /// CIDR blocks login is restricted to
    #[serde(with = "csv_string", skip_serializing_if = "Vec::is_empty")]
    pub bound_cidr_list: Vec<String>,
    /// Policies attached to issued tokens
    #[serde(with = "csv_string", skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<String>,
    /// Uses allowed per secret ID, 0 for unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id_num_uses: Option<u64>,
    /// Secret ID TTL in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id_ttl: Option<u64>,
    /// Uses allowed per issued token, 0 for unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_num_uses: Option<u64>,
    /// Issued token TTL in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_ttl: Option<u64>,
    /// Issued token maximum TTL in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_max_ttl: Option<u64>,
    /// Fixed period for periodic tokens, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,
}

/// Role configuration as returned by a role read.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleData {
    /// Require a secret ID when logging in
    #[serde(default)]
    pub bind_secret_id: bool,
    /// Policies attached to issued tokens
    #[serde(default)]
    pub policies: Vec<String>,
    /// Uses allowed per secret ID
    #[serde(default)]
    pub secret_id_num_uses: u64,
    /// Secret ID TTL in seconds
    #[serde(default)]
    pub secret_id_ttl: u64,
    /// Uses allowed per issued token
    #[serde(default)]
    pub token_num_uses: u64,
    /// Issued token TTL in seconds
    #[serde(default)]
    pub token_ttl: u64,
    /// Issued token maximum TTL in seconds
    #[serde(default)]
    pub token_max_ttl: u64,
    /// Fixed period for periodic tokens
    #[serde(default)]
    pub period: u64,
}

/// Payload of `auth/approle/role/{name}/role-id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleIdData {
    /// The role's role ID
    pub role_id: String,
}

/// Parameters for minting a secret ID against a role.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecretIdRequest {
    /// Metadata attached to the secret ID, included in audit logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    /// CIDR blocks this secret ID may be used from; comma-separated on
    /// the wire
    #[serde(with = "csv_string", skip_serializing_if = "Vec::is_empty")]
    pub cidr_list: Vec<String>,
}

/// Payload returned when a secret ID is minted.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretIdData {
    /// The secret ID
    pub secret_id: String,
    /// Accessor for the secret ID
    #[serde(default)]
    pub secret_id_accessor: String,
}

/// Login payload for `auth/approle/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Role ID
    pub role_id: String,
    /// Secret ID, required when the role binds secret IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_id_request_csv_field() {
        let request = SecretIdRequest {
            metadata: Some(HashMap::from([(
                "deployment".to_string(),
                "prod".to_string(),
            )])),
            cidr_list: vec!["10.0.0.0/8".to_string(), "172.16.0.0/12".to_string()],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["cidr_list"], "10.0.0.0/8,172.16.0.0/12");
        assert_eq!(json["metadata"]["deployment"], "prod");
    }

    #[test]
    fn test_secret_id_request_omits_empty_fields() {
        let request = SecretIdRequest::default();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_role_request_serializes_policies_as_csv() {
        let request = RoleRequest {
            bind_secret_id: true,
            policies: vec!["default".to_string(), "app".to_string()],
            secret_id_ttl: Some(600),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["policies"], "default,app");
        assert_eq!(json["secret_id_ttl"], 600);
        assert!(json.get("token_ttl").is_none());
    }

    #[test]
    fn test_role_data_tolerates_missing_fields() {
        let data: RoleData =
            serde_json::from_str(r#"{"bind_secret_id": true, "policies": ["web"]}"#).unwrap();
        assert!(data.bind_secret_id);
        assert_eq!(data.policies, vec!["web"]);
        assert_eq!(data.secret_id_num_uses, 0);
    }

    #[test]
    fn test_login_request_without_secret_id() {
        let request = LoginRequest {
            role_id: "role-123".to_string(),
            secret_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"role_id":"role-123"}"#);
    }
}
