// Gemini image API client

use super::ImageModel;
use crate::config::GeminiConfig;
use crate::error::{Result, StudioError};
use crate::image::ImagePayload;
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Gemini generateContent API, fixed to one image model.
///
/// Holds a pooled HTTP client and the process-wide API key. The key is not
/// validated up front; a missing or invalid key surfaces as a `Remote` error
/// on the first call.
pub struct GeminiClient {
    http_client: Client,
    api_base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client from configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(2)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| StudioError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// The model identifier this client is fixed to.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<ImagePayload> {
        let url = format!("{}/models/{}:generateContent", self.api_base_url, self.model);
        debug!(model = %self.model, "Dispatching generateContent request");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| StudioError::Remote(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| StudioError::Remote(e.to_string()))?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            error!(status = %status, "Gemini API error: {}", sanitize(&message));
            return Err(StudioError::Remote(message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| StudioError::Remote(format!("Invalid response: {}", e)))?;

        match parsed.first_image() {
            Some(inline) => {
                debug!(mime_type = %inline.mime_type, "Received image payload");
                Ok(ImagePayload::from(inline))
            }
            None => Err(StudioError::NoImageReturned),
        }
    }

    /// Extract the upstream message from a Gemini JSON error envelope.
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.status);
            }
        }
        None
    }
}

impl ImageModel for GeminiClient {
    async fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<ImagePayload> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(GenerationConfig::image(aspect_ratio)),
        };
        self.generate_content(&request).await
    }

    async fn edit(&self, source: &ImagePayload, instruction: &str) -> Result<ImagePayload> {
        // Source image first, then the instruction, matching the ordering
        // the image models are tuned for.
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::inline_image(source),
                Part::text(instruction),
            ])],
            generation_config: None,
        };
        self.generate_content(&request).await
    }
}
