//! Text-to-image backends.

use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::raster;

/// Image edge length requested from remote backends and used by the placeholder.
pub const IMAGE_SIZE: u32 = 512;

/// Validated text-to-image parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub steps: i64,
    pub guidance_scale: f64,
}

#[derive(Debug, Serialize)]
struct Txt2ImgRequest<'a> {
    prompt: &'a str,
    negative_prompt: &'a str,
    steps: i64,
    cfg_scale: f64,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct Txt2ImgResponse {
    #[serde(default)]
    images: Vec<String>,
}

/// Client for an AUTOMATIC1111-compatible `/sdapi/v1/txt2img` endpoint.
#[derive(Debug, Clone)]
pub struct DiffusionClient {
    http: Client,
    base_url: String,
}

impl DiffusionClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Returns the first generated image as PNG bytes.
    pub async fn txt2img(&self, request: &ImageRequest) -> Result<Vec<u8>> {
        let url = format!("{}/sdapi/v1/txt2img", self.base_url);
        debug!("Diffusion request to {} ({} steps)", url, request.steps);

        let response = self
            .http
            .post(&url)
            .json(&Txt2ImgRequest {
                prompt: &request.prompt,
                negative_prompt: &request.negative_prompt,
                steps: request.steps,
                cfg_scale: request.guidance_scale,
                width: IMAGE_SIZE,
                height: IMAGE_SIZE,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::InferenceError(format!(
                "Stable Diffusion request failed: {}",
                status.as_u16()
            )));
        }

        let body: Txt2ImgResponse = response.json().await?;
        decode_first_image(body)
    }
}

fn decode_first_image(body: Txt2ImgResponse) -> Result<Vec<u8>> {
    let encoded = body.images.into_iter().next().ok_or_else(|| {
        Error::InferenceError("Stable Diffusion returned no images".to_string())
    })?;

    // Some servers prefix a data URL header.
    let payload = encoded
        .split_once(',')
        .map(|(_, b64)| b64)
        .unwrap_or(&encoded);
    Ok(base64::engine::general_purpose::STANDARD.decode(payload.trim())?)
}

/// Text-to-image backend selected by the registry.
#[derive(Debug, Clone)]
pub enum ImageGenerator {
    Remote(DiffusionClient),
    Placeholder,
}

impl ImageGenerator {
    pub async fn generate(&self, request: &ImageRequest) -> Result<Vec<u8>> {
        match self {
            ImageGenerator::Remote(client) => client.txt2img(request).await,
            ImageGenerator::Placeholder => tokio::task::spawn_blocking(|| {
                raster::solid_png(IMAGE_SIZE, IMAGE_SIZE, raster::BLUE)
            })
            .await
            .map_err(|e| Error::InferenceError(format!("Image encoding failed: {}", e)))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_and_data_url_images() {
        let plain = Txt2ImgResponse {
            images: vec!["aGVsbG8=".to_string()],
        };
        assert_eq!(decode_first_image(plain).unwrap(), b"hello");

        let data_url = Txt2ImgResponse {
            images: vec!["data:image/png;base64,aGVsbG8=".to_string()],
        };
        assert_eq!(decode_first_image(data_url).unwrap(), b"hello");
    }

    #[test]
    fn empty_image_list_is_an_error() {
        let err = decode_first_image(Txt2ImgResponse { images: vec![] }).unwrap_err();
        assert!(err.to_string().contains("no images"));
    }

    #[test]
    fn request_uses_cfg_scale_field() {
        let body = serde_json::to_value(Txt2ImgRequest {
            prompt: "castle",
            negative_prompt: "",
            steps: 20,
            cfg_scale: 7.5,
            width: IMAGE_SIZE,
            height: IMAGE_SIZE,
        })
        .unwrap();
        assert_eq!(body["cfg_scale"], 7.5);
        assert_eq!(body["width"], 512);
    }
}
