//! System backend operations under `/v1/sys`.

use crate::{
    client::VaultClient,
    error::VaultResult,
    models::Secret,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

/// Server health as reported by `sys/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Whether the server is initialized
    pub initialized: bool,
    /// Whether the server is sealed
    pub sealed: bool,
    /// Whether this node is a standby
    pub standby: bool,
    /// Server time as a Unix timestamp
    #[serde(default)]
    pub server_time_utc: u64,
    /// Server version
    #[serde(default)]
    pub version: String,
    /// Cluster name
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Cluster ID
    #[serde(default)]
    pub cluster_id: Option<String>,
}

/// Seal state as reported by `sys/seal-status`.
#[derive(Debug, Clone, Deserialize)]
pub struct SealStatus {
    /// Whether the server is sealed
    pub sealed: bool,
    /// Threshold of key shares required to unseal
    #[serde(default)]
    pub t: u64,
    /// Total number of key shares
    #[serde(default)]
    pub n: u64,
    /// Unseal progress
    #[serde(default)]
    pub progress: u64,
    /// Server version
    #[serde(default)]
    pub version: String,
}

/// Parameters for mounting a secret backend.
#[derive(Debug, Clone, Serialize)]
pub struct MountRequest {
    /// Backend type, e.g. `"kv"`
    #[serde(rename = "type")]
    pub backend_type: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lease configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<MountConfig>,
}

/// A mounted secret backend as returned by `sys/mounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct MountInfo {
    /// Backend type
    #[serde(rename = "type")]
    pub backend_type: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Lease configuration
    #[serde(default)]
    pub config: Option<MountConfig>,
}

/// Mount lease configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MountConfig {
    /// Default lease TTL in seconds
    #[serde(default)]
    pub default_lease_ttl: u64,
    /// Maximum lease TTL in seconds
    #[serde(default)]
    pub max_lease_ttl: u64,
}

/// Lease state after a renewal.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaseRenewal {
    /// The renewed lease ID
    #[serde(default)]
    pub lease_id: String,
    /// Whether the lease remains renewable
    #[serde(default)]
    pub renewable: bool,
    /// Granted duration in seconds
    #[serde(default)]
    pub lease_duration: u64,
}

/// View of the system backend.
pub struct SysEndpoint<'a> {
    client: &'a VaultClient,
}

impl<'a> SysEndpoint<'a> {
    pub(crate) const fn new(client: &'a VaultClient) -> Self {
        Self { client }
    }

    /// Server health. Parsed regardless of HTTP status, since `sys/health`
    /// encodes sealed/standby state in the status code.
    pub async fn health(&self) -> VaultResult<HealthStatus> {
        self.client.get_unchecked("/v1/sys/health").await
    }

    /// Seal status.
    pub async fn seal_status(&self) -> VaultResult<SealStatus> {
        self.client.get("/v1/sys/seal-status").await
    }

    /// List mounted secret backends.
    pub async fn list_mounts(&self) -> VaultResult<Secret<HashMap<String, MountInfo>>> {
        self.client.get("/v1/sys/mounts").await
    }

    /// Mount a secret backend at `path`.
    pub async fn mount(&self, path: &str, request: &MountRequest) -> VaultResult<()> {
        self.client
            .put_void(&format!("/v1/sys/mounts/{path}"), request)
            .await
    }

    /// Unmount the secret backend at `path`.
    pub async fn unmount(&self, path: &str) -> VaultResult<()> {
        self.client
            .delete_void(&format!("/v1/sys/mounts/{path}"))
            .await
    }

    /// Renew a lease, requesting an `increment` extension.
    pub async fn renew_lease(
        &self,
        lease_id: &str,
        increment: Duration,
    ) -> VaultResult<LeaseRenewal> {
        let body = json!({
            "lease_id": lease_id,
            "increment": increment.as_secs(),
        });
        self.client.put("/v1/sys/leases/renew", &body).await
    }

    /// Revoke a lease.
    pub async fn revoke_lease(&self, lease_id: &str) -> VaultResult<()> {
        let body = json!({ "lease_id": lease_id });
        self.client.put_void("/v1/sys/leases/revoke", &body).await
    }
}
