//! Client for a local Ollama text-generation daemon.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Non-streaming completion via `/api/generate`.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        debug!("Ollama request to {} (model {})", url, model);

        let response = self
            .http
            .post(&url)
            .json(&OllamaGenerateRequest {
                model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::InferenceError(format!(
                "Ollama request failed: {}",
                status.as_u16()
            )));
        }

        let body: OllamaGenerateResponse = response.json().await?;
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::respond_once;

    #[test]
    fn request_disables_streaming() {
        let body = serde_json::to_value(OllamaGenerateRequest {
            model: "llama3.2",
            prompt: "hi",
            stream: false,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"model": "llama3.2", "prompt": "hi", "stream": false})
        );
    }

    #[test]
    fn missing_response_field_is_empty() {
        let parsed: OllamaGenerateResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert_eq!(parsed.response, "");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = OllamaClient::new(Client::new(), "http://localhost:11434/");
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[tokio::test]
    async fn server_error_status_is_an_error() {
        let url = respond_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let client = OllamaClient::new(Client::new(), url);
        let err = client.generate("llama3.2", "hi").await.unwrap_err();
        match err {
            Error::InferenceError(msg) => assert_eq!(msg, "Ollama request failed: 500"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_returns_response_field() {
        let url = respond_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 35\r\nConnection: close\r\n\r\n{\"response\":\"Shaken, not stirred.\"}",
        )
        .await;
        let client = OllamaClient::new(Client::new(), url);
        let text = client.generate("llama3.2", "drink?").await.unwrap();
        assert_eq!(text, "Shaken, not stirred.");
    }
}
