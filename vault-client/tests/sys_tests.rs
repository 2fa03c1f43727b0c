//! System backend tests: seal status, mount management, leases.

use serde_json::json;
use test_utils::MockVault;
use test_utils::fixtures;
use vault_client::sys::{MountConfig, MountRequest};
use vault_client::{VaultClient, VaultConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn client_for(mock: &MockVault) -> VaultClient {
    VaultClient::new(VaultConfig::new(mock.url()).with_token("s.root"))
        .expect("client should build")
}

#[tokio::test]
async fn seal_status_parses() {
    let vault = MockVault::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/sys/seal-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sealed": false,
            "t": 3,
            "n": 5,
            "progress": 0,
            "version": "1.15.2"
        })))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let status = client
        .sys()
        .seal_status()
        .await
        .expect("seal-status should parse");

    assert!(!status.sealed);
    assert_eq!(status.t, 3);
    assert_eq!(status.n, 5);
}

#[tokio::test]
async fn list_mounts_returns_typed_map() {
    let vault = MockVault::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/sys/mounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::secret_envelope(json!({
            "secret/": {
                "type": "kv",
                "description": "key/value secret storage",
                "config": {"default_lease_ttl": 0, "max_lease_ttl": 0}
            },
            "cubbyhole/": {
                "type": "cubbyhole",
                "description": "per-token private secret storage"
            }
        }))))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let mounts = client
        .sys()
        .list_mounts()
        .await
        .expect("mounts should parse");

    assert_eq!(mounts.data["secret/"].backend_type, "kv");
    assert_eq!(mounts.data["cubbyhole/"].backend_type, "cubbyhole");
}

#[tokio::test]
async fn mount_and_unmount_backend() {
    let vault = MockVault::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/mounts/apps"))
        .and(body_json(json!({
            "type": "kv",
            "description": "application secrets",
            "config": {"default_lease_ttl": 3600, "max_lease_ttl": 86400}
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(vault.server())
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/sys/mounts/apps"))
        .respond_with(ResponseTemplate::new(204))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let request = MountRequest {
        backend_type: "kv".to_string(),
        description: Some("application secrets".to_string()),
        config: Some(MountConfig {
            default_lease_ttl: 3600,
            max_lease_ttl: 86400,
        }),
    };

    client
        .sys()
        .mount("apps", &request)
        .await
        .expect("mount should succeed");
    client
        .sys()
        .unmount("apps")
        .await
        .expect("unmount should succeed");
}

#[tokio::test]
async fn renew_lease_round_trips() {
    let vault = MockVault::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/leases/renew"))
        .and(body_json(json!({
            "lease_id": "database/creds/readonly/abc123",
            "increment": 1800
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lease_id": "database/creds/readonly/abc123",
            "renewable": true,
            "lease_duration": 1800
        })))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let renewal = client
        .sys()
        .renew_lease(
            "database/creds/readonly/abc123",
            std::time::Duration::from_secs(1800),
        )
        .await
        .expect("renewal should succeed");

    assert_eq!(renewal.lease_duration, 1800);
    assert!(renewal.renewable);
}

#[tokio::test]
async fn revoke_lease_puts_lease_id() {
    let vault = MockVault::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/sys/leases/revoke"))
        .and(body_json(json!({"lease_id": "database/creds/readonly/abc123"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    client
        .sys()
        .revoke_lease("database/creds/readonly/abc123")
        .await
        .expect("revoke should succeed");
}
