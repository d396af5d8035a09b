//! Canned-response HTTP server for fetch tests.
//!
//! Binds an ephemeral local port and answers every connection with a fixed
//! JSON body, optionally after a delay. Raw HTTP/1.1 is written directly to
//! the socket so tests control the body byte-for-byte.
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

/// Test server answering with one canned body.
pub struct MockQuoteServer {
    /// Base URL to point a `FetchConfig` at.
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl MockQuoteServer {
    /// Serves `body` as a `200 OK` JSON response for every connection.
    #[allow(dead_code)]
    pub async fn serve_json(body: &'static str) -> Self {
        let (server, _) = Self::spawn(body, Duration::ZERO).await;
        server
    }

    /// Serves `body`, sleeping before answering each connection.
    #[allow(dead_code)]
    pub async fn serve_with_delay(body: &'static str, delay: Duration) -> Self {
        let (server, _) = Self::spawn(body, delay).await;
        server
    }

    /// Serves `body` and forwards every raw request to the returned channel.
    #[allow(dead_code)]
    pub async fn serve_capturing(body: &'static str) -> (Self, UnboundedReceiver<String>) {
        Self::spawn(body, Duration::ZERO).await
    }

    async fn spawn(body: &'static str, delay: Duration) -> (Self, UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);
        let (request_tx, request_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let request_tx = request_tx.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let read = stream.read(&mut buf).await.unwrap_or(0);
                    let _ = request_tx.send(String::from_utf8_lossy(&buf[..read]).into_owned());

                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        (Self { base_url, handle }, request_rx)
    }

    #[allow(dead_code)]
    pub fn abort(self) {
        self.handle.abort();
    }
}
