//! Endpoint tests: path composition, list/write/delete, response
//! wrapping and unwrapping.

use serde_json::json;
use test_utils::MockVault;
use test_utils::fixtures;
use vault_client::{SecretData, VaultClient, VaultConfig};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn client_for(mock: &MockVault) -> VaultClient {
    VaultClient::new(VaultConfig::new(mock.url()).with_token("s.root"))
        .expect("client should build")
}

#[tokio::test]
async fn auth_endpoint_prefixes_paths() {
    let vault = MockVault::start().await;
    vault
        .expect_read("auth/approle/role/web", "s.root", json!({"token_ttl": 600}))
        .await;

    let client = client_for(&vault);
    let role = client
        .auth()
        .read::<SecretData>("approle/role/web")
        .await
        .expect("read should hit /v1/auth/...");

    assert_eq!(role.data["token_ttl"], 600);
}

#[tokio::test]
async fn list_uses_list_query_parameter() {
    let vault = MockVault::start().await;
    vault
        .expect_list("secret/apps", &["web", "worker"])
        .await;

    let client = client_for(&vault);
    let listing = client
        .secret()
        .list::<SecretData>("secret/apps")
        .await
        .expect("list should succeed");

    assert_eq!(listing.data["keys"], json!(["web", "worker"]));
}

#[tokio::test]
async fn write_puts_payload_and_discards_body() {
    let vault = MockVault::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/secret/app"))
        .and(body_json(json!({"password": "hunter2"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    client
        .secret()
        .write("secret/app", &json!({"password": "hunter2"}))
        .await
        .expect("write should succeed");
}

#[tokio::test]
async fn write_with_response_returns_typed_envelope() {
    let vault = MockVault::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/auth/approle/role/web/secret-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::secret_envelope(json!({
            "secret_id": "sid-123",
            "secret_id_accessor": "acc-123"
        }))))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let response = client
        .auth()
        .write_with_response::<_, SecretData>("approle/role/web/secret-id", &json!({}))
        .await
        .expect("write should return a payload");

    assert_eq!(response.data["secret_id"], "sid-123");
}

#[tokio::test]
async fn delete_issues_http_delete() {
    let vault = MockVault::start().await;
    vault.expect_delete("secret/app").await;

    let client = client_for(&vault);
    client
        .secret()
        .delete("secret/app")
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn read_wrapped_sends_wrap_ttl_header() {
    let vault = MockVault::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/app"))
        .and(header("X-Vault-Wrap-Ttl", "60"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::wrapped_envelope("hvs.wrap", 60, "secret/app")),
        )
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let wrapped = client
        .secret()
        .read_wrapped("secret/app", std::time::Duration::from_secs(60))
        .await
        .expect("wrapped read should succeed");

    assert_eq!(wrapped.wrap_info.token, "hvs.wrap");
    assert_eq!(wrapped.wrap_info.ttl, 60);
    assert_eq!(wrapped.wrap_info.creation_path.as_deref(), Some("secret/app"));
}

#[tokio::test]
async fn unwrap_redeems_token_against_cubbyhole() {
    let vault = MockVault::start().await;
    let inner = fixtures::secret_envelope(json!({"password": "hunter2"}));

    // The unwrap request must authenticate as the wrapping token, not the
    // client's own token.
    Mock::given(method("GET"))
        .and(path("/v1/cubbyhole/response"))
        .and(header("X-Vault-Token", "hvs.wrap"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::cubbyhole_response_envelope(&inner)),
        )
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let secret = client
        .secret()
        .unwrap::<SecretData>("hvs.wrap")
        .await
        .expect("unwrap should succeed");

    assert_eq!(secret.data["password"], "hunter2");
}

#[tokio::test]
async fn unwrap_with_garbage_inner_payload_is_a_serialization_error() {
    let vault = MockVault::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cubbyhole/response"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::secret_envelope(
            json!({"response": "not json"}),
        )))
        .mount(vault.server())
        .await;

    let client = client_for(&vault);
    let err = client
        .secret()
        .unwrap::<SecretData>("hvs.wrap")
        .await
        .expect_err("garbage inner payload should fail");

    assert!(matches!(err, vault_client::VaultError::Serialization(_)));
}
