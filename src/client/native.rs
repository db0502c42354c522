//! Native HTTP transport
//!
//! reqwest-backed [`Transport`] for running the REST client outside the
//! browser (smoke checks against a running backend, tooling).

use async_trait::async_trait;
use reqwest::Client;

use super::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// [`Transport`] over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    origin: String,
}

impl ReqwestTransport {
    /// Create a transport that prefixes every request URL with `origin`
    /// (e.g. `http://localhost:8000`), mirroring how a browser resolves
    /// relative paths against the page origin.
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_client(Client::new(), origin)
    }

    pub fn with_client(client: Client, origin: impl Into<String>) -> Self {
        Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.origin, url)
        }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.absolute(&request.url);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiClient;
    use crate::error::ApiError;
    use crate::models::{Page, Technician};
    use axum::{
        extract::Path,
        http::StatusCode,
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route(
                "/api/technicians",
                get(|| async {
                    Json(json!({
                        "items": [
                            { "id": 1, "name": "Mario Rossi", "phone": "333 1234567", "is_active": true }
                        ],
                        "total": 1, "page": 1, "size": 20, "pages": 1
                    }))
                }),
            )
            .route(
                "/api/works",
                post(|Json(body): Json<Value>| async move {
                    if body["wr_number"] == "WR-DUP" {
                        (
                            StatusCode::CONFLICT,
                            Json(json!({ "detail": "WR number already exists" })),
                        )
                    } else {
                        (StatusCode::CREATED, Json(body))
                    }
                }),
            )
            .route(
                "/api/works/:id",
                delete(|Path(id): Path<i64>| async move {
                    if id == 1 {
                        StatusCode::NO_CONTENT
                    } else {
                        StatusCode::NOT_FOUND
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_absolute_url() {
        let transport = ReqwestTransport::new("http://localhost:8000/");
        assert_eq!(transport.absolute("/api/stats"), "http://localhost:8000/api/stats");
        assert_eq!(transport.absolute("https://example.org/x"), "https://example.org/x");
    }

    #[tokio::test]
    async fn test_get_against_live_server() {
        let origin = spawn_backend().await;
        let api = ApiClient::new(ReqwestTransport::new(origin), "/api");

        let page: Page<Technician> = api.get("/technicians").await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Mario Rossi");
        assert_eq!(page.items[0].email, None);
    }

    #[tokio::test]
    async fn test_post_detail_against_live_server() {
        let origin = spawn_backend().await;
        let api = ApiClient::new(ReqwestTransport::new(origin), "/api");

        let created: Value = api
            .post("/works", &json!({ "wr_number": "WR-9" }))
            .await
            .unwrap();
        assert_eq!(created["wr_number"], "WR-9");

        let err = api
            .post::<_, Value>("/works", &json!({ "wr_number": "WR-DUP" }))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "WR number already exists");
    }

    #[tokio::test]
    async fn test_delete_and_missing_route_against_live_server() {
        let origin = spawn_backend().await;
        let api = ApiClient::new(ReqwestTransport::new(origin), "/api");

        assert!(api.delete("/works/1").await.is_ok());
        assert!(matches!(
            api.delete("/works/2").await,
            Err(ApiError::Status(404))
        ));
        assert!(matches!(
            api.get::<Value>("/nowhere").await,
            Err(ApiError::Status(404))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = ApiClient::new(ReqwestTransport::new(format!("http://{}", addr)), "/api");
        assert!(matches!(
            api.get::<Value>("/stats").await,
            Err(ApiError::Network(_))
        ));
    }
}
