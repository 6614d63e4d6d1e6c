use serde::{Deserialize, Serialize};

use crate::error::GenError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Wire shape of a `/generate` response. Every field except `success` is
/// optional; `GenerationOutcome` is the validated form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>, // data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

/// Validated result of one generation cycle. A successful payload must
/// carry an image and the enhanced prompt; a failed one keeps whatever
/// diagnostics the server supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Success {
        message: Option<String>,
        image: String,
        enhanced_prompt: String,
        model_used: Option<String>,
    },
    Failure {
        error: Option<String>,
        enhanced_prompt: Option<String>,
        image: Option<String>,
    },
}

impl TryFrom<GenerateResponse> for GenerationOutcome {
    type Error = GenError;

    fn try_from(response: GenerateResponse) -> Result<Self, Self::Error> {
        if response.success {
            let image = response.image.ok_or_else(|| {
                GenError::ResponseError("successful response missing 'image'".into())
            })?;
            let enhanced_prompt = response.enhanced_prompt.ok_or_else(|| {
                GenError::ResponseError("successful response missing 'enhanced_prompt'".into())
            })?;

            Ok(GenerationOutcome::Success {
                message: response.message,
                image,
                enhanced_prompt,
                model_used: response.model_used,
            })
        } else {
            Ok(GenerationOutcome::Failure {
                error: response.error,
                enhanced_prompt: response.enhanced_prompt,
                image: response.image,
            })
        }
    }
}

impl From<GenerationOutcome> for GenerateResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        match outcome {
            GenerationOutcome::Success {
                message,
                image,
                enhanced_prompt,
                model_used,
            } => GenerateResponse {
                success: true,
                message,
                image: Some(image),
                enhanced_prompt: Some(enhanced_prompt),
                model_used,
                error: None,
                demo_mode: Some(false),
            },
            GenerationOutcome::Failure {
                error,
                enhanced_prompt,
                image,
            } => GenerateResponse {
                success: false,
                message: None,
                image,
                enhanced_prompt,
                model_used: Some("Error/Fallback Mode".to_string()),
                error,
                demo_mode: Some(true),
            },
        }
    }
}

/// Request passed to a text-to-image backend. Width, height, and tuning
/// come from the backend's configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub negative_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageGenerationResponse {
    pub image_data: String, // data:image/png;base64,...
    pub model: String,
}
