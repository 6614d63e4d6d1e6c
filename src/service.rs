use std::sync::Arc;

use crate::{
    enhance,
    hf::TextToImage,
    models::{GenerationOutcome, ImageGenerationRequest},
    placeholder,
};

/// Orchestrates one generation cycle: enhance the prompt, run the
/// text-to-image backend, and wrap the result into a tagged outcome.
pub struct GenerationService {
    generator: Arc<dyn TextToImage>,
    demo_fallback: bool,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextToImage>, demo_fallback: bool) -> Self {
        Self {
            generator,
            demo_fallback,
        }
    }

    pub async fn generate(&self, prompt: &str) -> GenerationOutcome {
        let _timer = crate::logger::timer("generate");

        let enhanced = enhance::enhance(prompt);
        log::debug!("Enhanced prompt: {}", enhanced.prompt);

        let request = ImageGenerationRequest {
            prompt: enhanced.prompt.clone(),
            negative_prompt: Some(enhanced.negative_prompt),
        };

        match self.generator.generate(request).await {
            Ok(response) => GenerationOutcome::Success {
                message: None,
                image: response.image_data,
                enhanced_prompt: enhanced.prompt,
                model_used: Some(response.model),
            },
            Err(e) => {
                log::error!("Image generation failed: {}", e);

                let image = if self.demo_fallback {
                    placeholder::placeholder_data_uri().ok()
                } else {
                    None
                };

                GenerationOutcome::Failure {
                    error: Some(e.to_string()),
                    enhanced_prompt: Some(enhanced.prompt),
                    image,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenError, Result};
    use crate::models::ImageGenerationResponse;
    use async_trait::async_trait;

    struct OkGenerator;

    #[async_trait]
    impl TextToImage for OkGenerator {
        async fn generate(
            &self,
            request: ImageGenerationRequest,
        ) -> Result<ImageGenerationResponse> {
            assert!(request.negative_prompt.is_some());
            Ok(ImageGenerationResponse {
                image_data: "data:image/png;base64,AAAA".to_string(),
                model: "test-model".to_string(),
            })
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextToImage for FailingGenerator {
        async fn generate(
            &self,
            _request: ImageGenerationRequest,
        ) -> Result<ImageGenerationResponse> {
            Err(GenError::UpstreamError("model offline".into()))
        }
    }

    #[tokio::test]
    async fn test_success_carries_enhanced_prompt_and_model() {
        let service = GenerationService::new(Arc::new(OkGenerator), true);

        match service.generate("a dragon").await {
            GenerationOutcome::Success {
                image,
                enhanced_prompt,
                model_used,
                message,
            } => {
                assert_eq!(image, "data:image/png;base64,AAAA");
                assert!(enhanced_prompt.starts_with("a dragon, "));
                assert_eq!(model_used.as_deref(), Some("test-model"));
                assert!(message.is_none());
            }
            GenerationOutcome::Failure { .. } => panic!("expected success"),
        }
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_placeholder() {
        let service = GenerationService::new(Arc::new(FailingGenerator), true);

        match service.generate("a dragon").await {
            GenerationOutcome::Failure {
                error,
                enhanced_prompt,
                image,
            } => {
                assert!(error.unwrap().contains("model offline"));
                assert!(enhanced_prompt.unwrap().starts_with("a dragon, "));
                assert!(image.unwrap().starts_with("data:image/png;base64,"));
            }
            GenerationOutcome::Success { .. } => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_failure_without_demo_fallback_has_no_image() {
        let service = GenerationService::new(Arc::new(FailingGenerator), false);

        match service.generate("a dragon").await {
            GenerationOutcome::Failure { image, .. } => assert!(image.is_none()),
            GenerationOutcome::Success { .. } => panic!("expected failure"),
        }
    }
}
