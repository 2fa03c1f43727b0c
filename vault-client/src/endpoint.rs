//! Generic endpoint: URL composition plus typed read/write/list/delete
//! and response-unwrapping against a base path.

use crate::{
    client::VaultClient,
    error::VaultResult,
    models::{Secret, WrappedSecret},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

const URI_ROOT_PATH: &str = "/v1";
const WRAPPED_RESPONSE_LOCATION: &str = "cubbyhole/response";

/// A view of the Vault API scoped to a base path.
///
/// Obtained from [`VaultClient::secret`] (base `/v1`) or
/// [`VaultClient::auth`] (base `/v1/auth`); paths passed to the
/// operations are relative to that base.
pub struct Endpoint<'a> {
    client: &'a VaultClient,
    uri_base_path: String,
}

/// Inner payload of a wrapped response stored at `cubbyhole/response`:
/// the original reply as a JSON string.
#[derive(Debug, Deserialize)]
struct WrappedResponseData {
    response: String,
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(client: &'a VaultClient, base_path: Option<&str>) -> Self {
        let uri_base_path = match base_path {
            Some(base) => format!("{URI_ROOT_PATH}/{base}"),
            None => URI_ROOT_PATH.to_string(),
        };
        Self {
            client,
            uri_base_path,
        }
    }

    fn uri(&self, path: &str) -> String {
        format!("{}/{}", self.uri_base_path, path)
    }

    /// Read the secret at `path`.
    ///
    /// # Errors
    ///
    /// [`crate::VaultError::SecretNotFound`] when nothing is stored at
    /// the path; other variants per the response status.
    pub async fn read<T: DeserializeOwned>(&self, path: &str) -> VaultResult<Secret<T>> {
        self.client.get(&self.uri(path)).await
    }

    /// Read the secret at `path` as a response-wrapped reply: the server
    /// stores the response in the caller's cubbyhole and returns a
    /// one-time-use wrapping token valid for `wrap_ttl`.
    pub async fn read_wrapped(&self, path: &str, wrap_ttl: Duration) -> VaultResult<WrappedSecret> {
        self.client.get_wrapped(&self.uri(path), wrap_ttl).await
    }

    /// List keys under `path`.
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> VaultResult<Secret<T>> {
        self.client.list(&self.uri(path)).await
    }

    /// Write `data` to `path`, discarding the response body.
    pub async fn write<B>(&self, path: &str, data: &B) -> VaultResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.client.put_void(&self.uri(path), data).await
    }

    /// Write `data` to `path` and deserialize the response, for writes
    /// that return a payload (e.g. minting credentials).
    pub async fn write_with_response<B, T>(&self, path: &str, data: &B) -> VaultResult<Secret<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client.put(&self.uri(path), data).await
    }

    /// Delete the secret at `path`.
    pub async fn delete(&self, path: &str) -> VaultResult<()> {
        self.client.delete_void(&self.uri(path)).await
    }

    /// Redeem a one-time-use wrapping token: reads the stored response
    /// from `cubbyhole/response` authenticated as the wrapping token,
    /// then parses the inner JSON string into a typed envelope.
    pub async fn unwrap<T: DeserializeOwned>(
        &self,
        unwrapping_token: &str,
    ) -> VaultResult<Secret<T>> {
        let wrapped: Secret<WrappedResponseData> = self
            .client
            .get_with_token(&self.uri(WRAPPED_RESPONSE_LOCATION), unwrapping_token)
            .await?;
        let secret = serde_json::from_str(&wrapped.data.response)?;
        Ok(secret)
    }
}
