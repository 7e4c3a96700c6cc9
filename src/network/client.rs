use super::error::{SyncError, SyncResult};
use super::protocol::Request;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Something that can carry one request to the multiplayer endpoint and back
pub trait Transport: Send + Sync + 'static {
    fn exchange(&self, request: Request) -> impl Future<Output = SyncResult<Value>> + Send;
}

/// POSTs JSON requests to an HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> SyncResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::ClientInit {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_failed(&self, error: reqwest::Error) -> SyncError {
        SyncError::RequestFailed {
            endpoint: self.endpoint.clone(),
            message: error.to_string(),
        }
    }
}

impl Transport for HttpTransport {
    async fn exchange(&self, request: Request) -> SyncResult<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.request_failed(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::BadStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SyncError::MalformedResponse {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Read one full HTTP request so the reply is not cut short by a reset
    async fn read_request(socket: &mut TcpStream) {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&data);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|value| value.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if data.len() >= end + 4 + length {
                    return;
                }
            }
        }
    }

    /// Answer a single request with a canned response, returning the endpoint URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/", addr)
    }

    fn transport(endpoint: String) -> HttpTransport {
        HttpTransport::new(endpoint, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_server_error_is_bad_status() {
        let endpoint = serve_once("500 Internal Server Error", "{}").await;
        let err = transport(endpoint).exchange(Request::GetPlayers).await.unwrap_err();
        assert!(matches!(err, SyncError::BadStatus { status: 500, .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let endpoint = serve_once("200 OK", "<html>gateway</html>").await;
        let err = transport(endpoint).exchange(Request::GetPlayers).await.unwrap_err();
        assert!(matches!(err, SyncError::MalformedResponse { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_json_body_is_returned() {
        let endpoint = serve_once("200 OK", r#"{"players":[]}"#).await;
        let reply = transport(endpoint).exchange(Request::GetPlayers).await.unwrap();
        assert_eq!(reply, serde_json::json!({ "players": [] }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = transport(format!("http://{}/", addr))
            .exchange(Request::GetPlayers)
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::RequestFailed { .. }), "{err:?}");
    }
}
