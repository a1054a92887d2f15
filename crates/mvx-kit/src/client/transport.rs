//! HTTP transport to the REST API.
//!
//! [`Transport`] is the seam between the client and the network. The default
//! [`HttpTransport`] uses `reqwest`; tests and alternative stacks can supply
//! their own implementation to [`Multiversx::with_transport`](crate::Multiversx::with_transport).

use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::TransportError;

/// GET/POST access to a JSON REST API.
///
/// Any non-2xx response must be reported as [`TransportError::Status`].
/// Retries, if any, are the implementation's business.
///
/// # Example
///
/// ```
/// use futures::future::BoxFuture;
/// use mvx_kit::{Transport, TransportError};
/// use serde_json::{Value, json};
///
/// struct Offline;
///
/// impl Transport for Offline {
///     fn get<'a>(
///         &'a self,
///         path: &'a str,
///         _query: &'a [(String, String)],
///     ) -> BoxFuture<'a, Result<Value, TransportError>> {
///         Box::pin(async move { Err::<Value, _>(TransportError::status(path, 503, "offline")) })
///     }
///
///     fn post<'a>(
///         &'a self,
///         _path: &'a str,
///         _body: String,
///     ) -> BoxFuture<'a, Result<Value, TransportError>> {
///         Box::pin(async { Ok::<_, TransportError>(json!({})) })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// GET `path` with the given query parameters.
    fn get<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<Value, TransportError>>;

    /// POST a JSON `body` to `path`.
    ///
    /// The body is passed pre-serialized so its bytes reach the API exactly
    /// as they were signed.
    fn post<'a>(&'a self, path: &'a str, body: String)
    -> BoxFuture<'a, Result<Value, TransportError>>;
}

/// [`Transport`] over HTTP(S) using `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a transport reusing an existing `reqwest` client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> Result<reqwest::Url, TransportError> {
        let mut url = reqwest::Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| TransportError::InvalidResponse(format!("Invalid URL: {}", e)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn read(path: &str, response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(path, status = status.as_u16(), "API response");

        if !status.is_success() {
            return Err(TransportError::status(path, status.as_u16(), body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl Transport for HttpTransport {
    fn get<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<Value, TransportError>> {
        Box::pin(async move {
            let url = self.url(path, query)?;
            tracing::trace!(%url, "GET");
            let response = self.client.get(url).send().await?;
            Self::read(path, response).await
        })
    }

    fn post<'a>(
        &'a self,
        path: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<Value, TransportError>> {
        Box::pin(async move {
            let url = self.url(path, &[])?;
            tracing::trace!(%url, "POST");
            let response = self
                .client
                .post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .send()
                .await?;
            Self::read(path, response).await
        })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}
