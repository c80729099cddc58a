//! Helpers shared by unit tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::config::SuiteConfig;
use crate::runtime::GenerationService;

/// Placeholder-only service whose text daemon is unreachable.
pub(crate) fn offline_service() -> GenerationService {
    service_with_ollama("http://127.0.0.1:1")
}

pub(crate) fn service_with_ollama(url: &str) -> GenerationService {
    GenerationService::new(SuiteConfig {
        ollama_url: url.to_string(),
        http_timeout_secs: 5,
        ..SuiteConfig::default()
    })
    .expect("build service")
}

/// Serve one canned HTTP response on a local port; returns the base URL.
pub(crate) async fn respond_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request_complete(&request) {
            let n = socket.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write");
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..head_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    request.len() >= head_end + 4 + content_length
}
