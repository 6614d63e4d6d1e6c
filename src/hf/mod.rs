pub mod image_client;

use crate::{
    config::HuggingFaceConfig,
    error::{GenError, Result},
    models::{ImageGenerationRequest, ImageGenerationResponse},
};
use async_trait::async_trait;

pub use image_client::ImageClient;

pub const DEFAULT_MODEL: &str = "black-forest-labs/FLUX.1-schnell";
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Text-to-image backend seam. The HuggingFace client implements it for
/// real inference; tests inject stubs.
#[async_trait]
pub trait TextToImage: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse>;
}

#[derive(Clone)]
pub struct HfClient {
    image_client: ImageClient,
}

impl HfClient {
    pub fn new(config: HuggingFaceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GenError::ClientError(e.to_string()))?;

        Ok(Self {
            image_client: ImageClient::new(http, config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
