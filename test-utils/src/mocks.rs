//! Wiremock-backed mock Vault server.

use crate::fixtures;
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock Vault server with helpers for the common expectations.
///
/// Wraps a [`wiremock::MockServer`]; tests that need matchers beyond the
/// helpers can register mocks on [`server`](Self::server) directly.
pub struct MockVault {
    server: MockServer,
}

impl MockVault {
    /// Start a mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server.
    #[must_use]
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// The underlying wiremock server.
    #[must_use]
    pub const fn server(&self) -> &MockServer {
        &self.server
    }

    /// Expect a GET of `/v1/{api_path}` from a client holding `token`,
    /// answered with a secret envelope around `data`.
    pub async fn expect_read(&self, api_path: &str, token: &str, data: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/{api_path}")))
            .and(header("X-Vault-Token", token))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::secret_envelope(data)))
            .mount(&self.server)
            .await;
    }

    /// Expect a LIST (`GET ?list=true`) of `/v1/{api_path}`, answered with
    /// a key-list envelope.
    pub async fn expect_list(&self, api_path: &str, keys: &[&str]) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/{api_path}")))
            .and(query_param("list", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::list_envelope(keys)))
            .mount(&self.server)
            .await;
    }

    /// Expect a PUT to `/v1/{api_path}`, answered with 204.
    pub async fn expect_write(&self, api_path: &str) {
        Mock::given(method("PUT"))
            .and(path(format!("/v1/{api_path}")))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Expect a DELETE of `/v1/{api_path}`, answered with 204.
    pub async fn expect_delete(&self, api_path: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/v1/{api_path}")))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Expect a GET of `/v1/{api_path}`, answered with `status` and the
    /// documented error body.
    pub async fn expect_error(&self, api_path: &str, status: u16, errors: &[&str]) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/{api_path}")))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(fixtures::error_body(errors)),
            )
            .mount(&self.server)
            .await;
    }
}
