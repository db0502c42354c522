//! REST API Client
//!
//! Generic JSON helpers (GET/POST/PUT/DELETE) shared by every page family.
//! Any non-2xx status is a failure. Every failure is logged with its
//! endpoint and then handed back to the caller.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Message used when a failed POST/PUT carries no usable `detail`
const UNKNOWN_ERROR: &str = "Unknown error";

/// JSON REST client over a pluggable [`Transport`]
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base: String,
}

/// Error body produced by the backend on rejected writes
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client whose endpoints are resolved against `base`.
    ///
    /// An empty base sends endpoints verbatim.
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { transport, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve an endpoint against the base URL
    pub fn url(&self, endpoint: &str) -> String {
        if self.base.is_empty() {
            endpoint.to_string()
        } else if endpoint.starts_with('/') {
            format!("{}{}", self.base, endpoint)
        } else {
            format!("{}/{}", self.base, endpoint)
        }
    }

    /// GET a JSON document
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<R> {
        let url = self.url(endpoint);
        self.get_inner(&url).await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "Error fetching {}", url);
            e
        })
    }

    /// POST a JSON body and decode the JSON reply
    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        self.write_inner(Method::Post, &url, body).await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "Error posting to {}", url);
            e
        })
    }

    /// PUT a JSON body and decode the JSON reply
    pub async fn put<B, R>(&self, endpoint: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        self.write_inner(Method::Put, &url, body).await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "Error putting to {}", url);
            e
        })
    }

    /// DELETE a resource; the response body is ignored
    pub async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        let url = self.url(endpoint);
        self.delete_inner(&url).await.map_err(|e| {
            tracing::error!(endpoint = %url, error = %e, "Error deleting {}", url);
            e
        })
    }

    async fn get_inner<R: DeserializeOwned>(&self, url: &str) -> ApiResult<R> {
        let response = self
            .transport
            .send(HttpRequest::new(Method::Get, url))
            .await?;

        if !response.ok() {
            return Err(ApiError::Status(response.status));
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    async fn write_inner<B, R>(&self, method: Method, url: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_value(body)?;
        let response = self
            .transport
            .send(HttpRequest::new(method, url).json(payload))
            .await?;

        if !response.ok() {
            return Err(ApiError::Server(server_detail(&response.body)));
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    async fn delete_inner(&self, url: &str) -> ApiResult<()> {
        let response = self
            .transport
            .send(HttpRequest::new(Method::Delete, url))
            .await?;

        if !response.ok() {
            return Err(ApiError::Status(response.status));
        }

        Ok(())
    }
}

/// Extract the backend's `detail` message from an error body
fn server_detail(body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    match detail {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => detail,
        Some(serde_json::Value::String(_)) | Some(serde_json::Value::Null) | None => {
            UNKNOWN_ERROR.to_string()
        }
        // FastAPI validation errors arrive as a list
        Some(other) => other.to_string(),
    }
}
