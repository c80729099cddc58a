//! Text-to-image runtime methods.

use tracing::info;

use crate::backends::ImageRequest;
use crate::catalog::ModelKind;
use crate::error::{Error, Result};
use crate::runtime::service::GenerationService;

pub const MAX_STEPS: i64 = 150;

impl GenerationService {
    /// Generate a PNG for `request`.
    pub async fn generate_image(&self, request: &ImageRequest) -> Result<Vec<u8>> {
        if request.prompt.is_empty() {
            return Err(Error::InvalidInput("Prompt required".to_string()));
        }
        if !(1..=MAX_STEPS).contains(&request.steps) {
            return Err(Error::InvalidInput(format!(
                "steps must be between 1 and {}",
                MAX_STEPS
            )));
        }

        let model = self.registry.load(ModelKind::StableDiffusion).await?;
        info!(
            "Generating image: {} ({} steps, guidance {})",
            request.prompt, request.steps, request.guidance_scale
        );

        model.image_generator()?.generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::offline_service;

    fn request(prompt: &str, steps: i64) -> ImageRequest {
        ImageRequest {
            prompt: prompt.to_string(),
            negative_prompt: String::new(),
            steps,
            guidance_scale: 7.5,
        }
    }

    #[tokio::test]
    async fn placeholder_png() {
        let service = offline_service();
        let png = service.generate_image(&request("castle", 20)).await.unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn rejects_out_of_range_steps() {
        let service = offline_service();
        for steps in [-5, 0, MAX_STEPS + 1] {
            let err = service
                .generate_image(&request("castle", steps))
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }
}
