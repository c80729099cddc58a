//! Text generation via the local daemon.

use tracing::{info, warn};

use crate::runtime::service::GenerationService;
use crate::runtime::types::TextGeneration;

const FALLBACK_PREFIX_CHARS: usize = 100;

impl GenerationService {
    /// Generate text, degrading to a canned echo when the daemon is unreachable.
    pub async fn generate_text(&self, prompt: &str, model: Option<&str>) -> TextGeneration {
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(self.config.default_llm_model.as_str())
            .to_string();
        info!("LLM request: {} chars (model {})", prompt.len(), model);

        let response = match self.ollama.generate(&model, prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Ollama not available: {}", err);
                fallback_text(prompt)
            }
        };
        let tokens = response.split_whitespace().count();

        TextGeneration {
            response,
            model,
            tokens,
        }
    }
}

pub(crate) fn fallback_text(prompt: &str) -> String {
    let head: String = prompt.chars().take(FALLBACK_PREFIX_CHARS).collect();
    format!("[FALLBACK] Processed command: {}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{offline_service, respond_once, service_with_ollama};

    #[test]
    fn fallback_truncates_to_100_chars() {
        let prompt = "x".repeat(150);
        let text = fallback_text(&prompt);
        assert_eq!(
            text,
            format!("[FALLBACK] Processed command: {}...", "x".repeat(100))
        );
    }

    #[tokio::test]
    async fn unreachable_daemon_falls_back() {
        let service = offline_service();
        let result = service.generate_text("open the vault", None).await;
        assert_eq!(result.model, "llama3.2");
        assert_eq!(
            result.response,
            "[FALLBACK] Processed command: open the vault..."
        );
        assert_eq!(result.tokens, 6);
    }

    #[tokio::test]
    async fn explicit_model_is_echoed() {
        let service = offline_service();
        let result = service.generate_text("hi", Some("mistral")).await;
        assert_eq!(result.model, "mistral");
        assert_eq!(service.models_loaded().await, 0);
    }

    #[tokio::test]
    async fn daemon_error_status_falls_back() {
        let url = respond_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let service = service_with_ollama(&url);
        let result = service.generate_text("status report", None).await;
        assert_eq!(
            result.response,
            "[FALLBACK] Processed command: status report..."
        );
        assert_eq!(result.tokens, 5);
    }
}
