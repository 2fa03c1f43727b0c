//! Vault HTTP client: header injection, status mapping, JSON (de)serialization.

use crate::{
    config::VaultConfig,
    endpoint::Endpoint,
    error::{VaultError, VaultResult},
    sys::SysEndpoint,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument};

const TOKEN_HEADER: &str = "X-Vault-Token";
const WRAP_TTL_HEADER: &str = "X-Vault-Wrap-Ttl";

/// Typed client for the Vault HTTP API.
///
/// Holds the connection pool and the configured client token; all typed
/// operations live on the endpoints returned by [`secret`](Self::secret),
/// [`auth`](Self::auth) and [`sys`](Self::sys).
pub struct VaultClient {
    config: VaultConfig,
    base_url: String,
    http: Client,
}

impl VaultClient {
    /// Create a new Vault client.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] for an unusable address, or
    /// [`VaultError::Http`] if the underlying client cannot be built.
    pub fn new(config: VaultConfig) -> VaultResult<Self> {
        let base_url = config.base_url()?;
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .build()
            .map_err(VaultError::Http)?;

        Ok(Self {
            config,
            base_url,
            http,
        })
    }

    /// Endpoint for secret backends, rooted at `/v1`.
    #[must_use]
    pub fn secret(&self) -> Endpoint<'_> {
        Endpoint::new(self, None)
    }

    /// Endpoint for auth backends, rooted at `/v1/auth`.
    #[must_use]
    pub fn auth(&self) -> Endpoint<'_> {
        Endpoint::new(self, Some("auth"))
    }

    /// Endpoint for system backend operations under `/v1/sys`.
    #[must_use]
    pub fn sys(&self) -> SysEndpoint<'_> {
        SysEndpoint::new(self)
    }

    #[instrument(skip(self), fields(path))]
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> VaultResult<T> {
        debug!(path, "GET");
        self.send(self.request(Method::GET, path), path).await
    }

    /// GET with an explicit token override, used by unwrap.
    pub(crate) async fn get_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> VaultResult<T> {
        debug!(path, "GET with token override");
        let request = self.http.get(self.url(path)).header(TOKEN_HEADER, token);
        self.send(request, path).await
    }

    /// GET requesting a response-wrapped reply.
    pub(crate) async fn get_wrapped<T: DeserializeOwned>(
        &self,
        path: &str,
        wrap_ttl: Duration,
    ) -> VaultResult<T> {
        debug!(path, wrap_ttl_secs = wrap_ttl.as_secs(), "GET wrapped");
        let request = self
            .request(Method::GET, path)
            .header(WRAP_TTL_HEADER, wrap_ttl.as_secs().to_string());
        self.send(request, path).await
    }

    #[instrument(skip(self), fields(path))]
    pub(crate) async fn list<T: DeserializeOwned>(&self, path: &str) -> VaultResult<T> {
        debug!(path, "LIST");
        let request = self.request(Method::GET, path).query(&[("list", "true")]);
        self.send(request, path).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> VaultResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "PUT");
        let request = self.request(Method::PUT, path).json(body);
        self.send(request, path).await
    }

    pub(crate) async fn put_void<B>(&self, path: &str, body: &B) -> VaultResult<()>
    where
        B: Serialize + ?Sized,
    {
        debug!(path, "PUT (no response body)");
        let request = self.request(Method::PUT, path).json(body);
        self.send_void(request, path).await
    }

    pub(crate) async fn delete_void(&self, path: &str) -> VaultResult<()> {
        debug!(path, "DELETE");
        self.send_void(self.request(Method::DELETE, path), path)
            .await
    }

    /// GET that parses the body regardless of status, for endpoints like
    /// `sys/health` that encode state in the status code.
    pub(crate) async fn get_unchecked<T: DeserializeOwned>(&self, path: &str) -> VaultResult<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| VaultError::unavailable(e.to_string()))?;
        response.json().await.map_err(VaultError::from)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = &self.config.token {
            request = request.header(TOKEN_HEADER, token.expose_secret());
        }
        request
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> VaultResult<T> {
        let response = Self::checked(request, path).await?;
        response.json().await.map_err(VaultError::from)
    }

    async fn send_void(&self, request: RequestBuilder, path: &str) -> VaultResult<()> {
        Self::checked(request, path).await?;
        Ok(())
    }

    async fn checked(request: RequestBuilder, path: &str) -> VaultResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| VaultError::unavailable(e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            404 => Err(VaultError::not_found(path)),
            403 => Err(VaultError::PermissionDenied(path.to_string())),
            429 => Err(VaultError::RateLimited),
            s if s >= 500 => {
                let text = response.text().await.unwrap_or_default();
                Err(VaultError::unavailable(format!("Status {status}: {text}")))
            }
            s if !status.is_success() => {
                let errors = api_errors(response).await;
                Err(VaultError::Api { status: s, errors })
            }
            _ => Ok(response),
        }
    }
}

/// Extract the `errors` array from a Vault error body, falling back to
/// the raw text when the body is not the documented shape.
async fn api_errors(response: Response) -> Vec<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        errors: Vec<String>,
    }

    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.errors,
        Err(_) if text.is_empty() => Vec::new(),
        Err(_) => vec![text],
    }
}
