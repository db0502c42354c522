//! Fetch Transport
//!
//! Sends the core client's requests through the browser `fetch` API.

use async_trait::async_trait;
use gestionale_fibra::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use gloo_net::http::{Request, RequestBuilder};

/// [`Transport`] backed by `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = builder(request.method, &request.url);

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError::new(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let body = read_body(status, response.text().await)?;

        Ok(HttpResponse::new(status, body))
    }
}

/// Body text of a response; only error statuses may lose an unreadable body
fn read_body(status: u16, text: Result<String, gloo_net::Error>) -> Result<String, TransportError> {
    match text {
        Ok(body) => Ok(body),
        // An unreadable body on an error status still reports the status
        Err(_) if !(200..300).contains(&status) => Ok(String::new()),
        Err(e) => Err(TransportError::new(format!("Body read error: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn broken() -> Result<String, gloo_net::Error> {
        Err(gloo_net::Error::GlooError("stream interrupted".to_string()))
    }

    #[wasm_bindgen_test]
    fn test_unreadable_success_body_is_transport_error() {
        let err = read_body(200, broken()).unwrap_err();
        assert!(err.to_string().contains("stream interrupted"));
    }

    #[wasm_bindgen_test]
    fn test_unreadable_error_body_keeps_status() {
        assert_eq!(read_body(502, broken()).unwrap(), "");
        assert_eq!(read_body(200, Ok("{}".to_string())).unwrap(), "{}");
    }
}
