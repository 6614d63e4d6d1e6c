use crate::{
    config::HuggingFaceConfig,
    error::{GenError, Result},
    hf::{TextToImage, DEFAULT_ENDPOINT, DEFAULT_MODEL},
    models::{ImageGenerationRequest, ImageGenerationResponse},
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    config: HuggingFaceConfig,
}

impl ImageClient {
    pub fn new(http: reqwest::Client, config: HuggingFaceConfig) -> Self {
        Self { http, config }
    }

    fn model_id(&self) -> &str {
        self.config.model_id.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    fn url(&self) -> String {
        let endpoint = self.config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        format!("{}/models/{}", endpoint.trim_end_matches('/'), self.model_id())
    }
}

#[async_trait]
impl TextToImage for ImageClient {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let model_id = self.model_id().to_string();

        // Serverless inference caps num_inference_steps at 16
        let request_payload = json!({
            "inputs": request.prompt,
            "parameters": {
                "negative_prompt": request.negative_prompt,
                "guidance_scale": self.config.guidance_scale.unwrap_or(4.0),
                "num_inference_steps": self.config.num_inference_steps.unwrap_or(12),
                "width": self.config.width.unwrap_or(1024),
                "height": self.config.height.unwrap_or(1024)
            }
        });

        log::info!("Generating image with model: {}", model_id);

        let mut builder = self
            .http
            .post(self.url())
            .header(reqwest::header::ACCEPT, "image/png")
            .json(&request_payload);

        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GenError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenError::UpstreamError(format!(
                "inference request returned {}: {}",
                status, body
            )));
        }

        let image_bytes = response
            .bytes()
            .await
            .map_err(|e| GenError::ResponseError(e.to_string()))?;

        if image_bytes.is_empty() {
            return Err(GenError::ResponseError("empty image response".into()));
        }

        Ok(ImageGenerationResponse {
            image_data: format!("data:image/png;base64,{}", STANDARD.encode(&image_bytes)),
            model: model_id,
        })
    }
}
