//! HTTP transport over reqwest (fetch on wasm32).

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::{interpret_response, ApiRequest, Remote};
use crate::error::RemoteError;

#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    /// `base_url` must be absolute, e.g. the page origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Remote for HttpRemote {
    async fn request(&self, request: ApiRequest) -> Result<Value, RemoteError> {
        let url = self.url_for(&request.path);
        log::debug!("[remote] {} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("[remote] {} {} failed: {}", request.method, url, e);
            RemoteError::Transport(e.to_string())
        })?;
        let status = response.status().as_u16();
        let result = match response.bytes().await {
            Ok(body) => interpret_response(status, &body),
            Err(e) => {
                log::warn!("[remote] unreadable body from {}: {}", url, e);
                interpret_response(status, &[])
            }
        };
        if let Err(e) = &result {
            log::warn!("[remote] {} {} -> {}", request.method, url, e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemPatch;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve exactly one HTTP exchange on loopback and hand back the raw request.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            let header_end = loop {
                let n = stream.read(&mut chunk).unwrap();
                assert!(n > 0, "connection closed before headers ended");
                raw.extend_from_slice(&chunk[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            while raw.len() < header_end + length {
                let n = stream.read(&mut chunk).unwrap();
                assert!(n > 0, "connection closed before body ended");
                raw.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8(raw).unwrap()
        });
        (base, handle)
    }

    fn loopback_remote(base: &str) -> HttpRemote {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpRemote::with_client(client, base)
    }

    fn split_request(raw: &str) -> (String, serde_json::Value) {
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        (head.to_lowercase(), serde_json::from_str(body).unwrap())
    }

    #[tokio::test]
    async fn test_update_sends_json_and_maps_error_status() {
        let (base, server) = serve_once("404 Not Found", r#"{"error": "Item not found"}"#);
        let remote = loopback_remote(&base);

        let err = remote
            .update_item("Weekly Shop", 7, &ItemPatch::checked(true))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RemoteError::Status { status: 404, message: "Item not found".to_string() }
        );

        let (head, body) = split_request(&server.join().unwrap());
        assert!(head.starts_with("patch /api/items/weekly%20shop/7 http/1.1"));
        assert!(head.contains("content-type: application/json"));
        assert_eq!(body, serde_json::json!({ "checked": true }));
    }

    #[tokio::test]
    async fn test_create_item_decodes_created_item() {
        let (base, server) = serve_once(
            "201 Created",
            r#"{"item": {"id": 3, "text": "eggs", "checked": false}}"#,
        );
        let remote = loopback_remote(&base);

        let item = remote.create_item("Default Trip", "eggs").await.unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.text, "eggs");
        assert!(!item.checked);

        let (head, body) = split_request(&server.join().unwrap());
        assert!(head.starts_with("post /api/items http/1.1"));
        assert!(head.contains("content-type: application/json"));
        assert_eq!(body, serde_json::json!({ "trip": "Default Trip", "text": "eggs" }));
    }

    #[test]
    fn test_url_for_joins_without_double_slash() {
        let remote = HttpRemote::new("http://localhost:5000/");
        assert_eq!(remote.url_for("/api/items"), "http://localhost:5000/api/items");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on loopback is not expected to accept HTTP
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let remote = HttpRemote::with_client(client, "http://127.0.0.1:9");
        let err = remote.delete_item("Trip", 1).await.unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
    }
}
