//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::Transport;
use crate::catalog::CatalogError;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport using a shared reqwest client
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, CatalogError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port; returns the base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Read until the end of the request headers
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_success_parses_json() {
        let base = serve_once("200 OK", r#"{"id": 25, "name": "pikachu"}"#).await;
        let transport = HttpTransport::new(DEFAULT_TIMEOUT).unwrap();

        let value = transport
            .get_json(&format!("{}/pokemon/pikachu", base))
            .await
            .unwrap();

        assert_eq!(value["id"], 25);
        assert_eq!(value["name"], "pikachu");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_status() {
        let base = serve_once("404 Not Found", "Not Found").await;
        let transport = HttpTransport::new(DEFAULT_TIMEOUT).unwrap();

        let err = transport
            .get_json(&format!("{}/pokemon/missingno", base))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Status { status: 404, .. }));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_json_maps_to_decode() {
        let base = serve_once("200 OK", "<html>not json</html>").await;
        let transport = HttpTransport::new(DEFAULT_TIMEOUT).unwrap();

        let err = transport
            .get_json(&format!("{}/type", base))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_request() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(DEFAULT_TIMEOUT).unwrap();
        let err = transport
            .get_json(&format!("http://{}/type", addr))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Request { .. }));
    }
}
