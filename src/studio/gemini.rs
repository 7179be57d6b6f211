use super::credentials::CredentialProvider;
use super::prompts::{logo_prompt, strategy_instruction, strategy_schema};
use super::wire::{ApiErrorEnvelope, GenerateContentResponse, Operation, PredictResponse};
use super::BrandStudio;
use crate::config::AppConfig;
use crate::errors::{StudioError, StudioResult};
use crate::media::{EmbeddedImage, VideoClip, DEFAULT_VIDEO_MIME};
use crate::model::BrandStrategy;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";
const EDIT_RESULT_MIME: &str = "image/png";
const LOGO_MIME: &str = "image/jpeg";

/// Endpoint and model settings for [`GeminiStudio`].
#[derive(Debug, Clone)]
pub struct StudioSettings {
    pub base_url: String,
    pub strategy_model: String,
    pub logo_model: String,
    pub edit_model: String,
    pub video_model: String,
    pub brand_language: String,
    pub animation_prompt: String,
    pub poll_interval: Duration,
    pub max_poll_attempts: Option<u32>,
    pub request_timeout: Duration,
}

impl From<&AppConfig> for StudioSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            strategy_model: config.strategy_model.clone(),
            logo_model: config.logo_model.clone(),
            edit_model: config.edit_model.clone(),
            video_model: config.video_model.clone(),
            brand_language: config.brand_language.clone(),
            animation_prompt: config.animation_prompt.clone(),
            poll_interval: config.poll_interval(),
            max_poll_attempts: config.max_poll_attempts(),
            request_timeout: config.request_timeout(),
        }
    }
}

/// [`BrandStudio`] backed by the Gemini, Imagen and Veo REST endpoints.
pub struct GeminiStudio {
    client: Client,
    settings: StudioSettings,
    credentials: Arc<dyn CredentialProvider>,
}

impl GeminiStudio {
    pub fn new(settings: StudioSettings, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            client: Client::new(),
            settings,
            credentials,
        }
    }

    pub fn settings(&self) -> &StudioSettings {
        &self.settings
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.settings.base_url, model, method)
    }

    // Resolved per request so a key selected mid-session is picked up.
    fn api_key(&self) -> StudioResult<String> {
        self.credentials.api_key().ok_or(StudioError::NoApiKey)
    }

    fn authorized(&self, request: RequestBuilder, key: &str) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, key)
            .timeout(self.settings.request_timeout)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
        key: &str,
    ) -> StudioResult<T> {
        debug!(url, "POST");
        let response = self
            .authorized(self.client.post(url), key)
            .json(body)
            .send()
            .await?;
        Ok(check_status(response).await?.json::<T>().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, key: &str) -> StudioResult<T> {
        debug!(url, "GET");
        let response = self.authorized(self.client.get(url), key).send().await?;
        Ok(check_status(response).await?.json::<T>().await?)
    }

    async fn wait_for_operation(
        &self,
        mut operation: Operation,
        key: &str,
    ) -> StudioResult<Operation> {
        let url = format!("{}/v1beta/{}", self.settings.base_url, operation.name);
        let mut attempts = 0u32;

        while !operation.done {
            if let Some(max) = self.settings.max_poll_attempts {
                if attempts >= max {
                    warn!(operation = %operation.name, attempts, "video operation did not finish");
                    return Err(StudioError::VideoGenerationFailed(format!(
                        "operation still running after {} status checks",
                        attempts
                    )));
                }
            }
            tokio::time::sleep(self.settings.poll_interval).await;
            attempts += 1;

            let name = std::mem::take(&mut operation.name);
            operation = self.get_json(&url, key).await?;
            if operation.name.is_empty() {
                operation.name = name;
            }
            debug!(
                operation = %operation.name,
                attempts,
                done = operation.done,
                "polled video operation"
            );
        }

        Ok(operation)
    }
}

async fn check_status(response: Response) -> StudioResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or(body);
    warn!(status = status.as_u16(), %message, "provider request failed");
    Err(StudioError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl BrandStudio for GeminiStudio {
    async fn generate_strategy(&self, mission: &str) -> StudioResult<BrandStrategy> {
        if mission.trim().is_empty() {
            return Err(StudioError::StrategyGenerationFailed(
                "mission is empty".to_string(),
            ));
        }
        let key = self.api_key()?;

        let body = json!({
            "contents": [{
                "parts": [{ "text": strategy_instruction(mission, &self.settings.brand_language) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": strategy_schema(),
            }
        });
        let url = self.model_url(&self.settings.strategy_model, "generateContent");
        let response: GenerateContentResponse = self.post_json(&url, &body, &key).await?;

        let text = response.text().ok_or_else(|| {
            StudioError::StrategyGenerationFailed("the model returned no text".to_string())
        })?;
        let strategy: BrandStrategy = serde_json::from_str(&text).map_err(|e| {
            StudioError::StrategyGenerationFailed(format!("unparseable response: {}", e))
        })?;
        let strategy = strategy
            .normalize(mission)
            .map_err(StudioError::StrategyGenerationFailed)?;

        info!(company = %strategy.company_name, "brand strategy generated");
        Ok(strategy)
    }

    async fn generate_logo(&self, prompt: &str) -> StudioResult<EmbeddedImage> {
        let key = self.api_key()?;

        let body = json!({
            "instances": [{ "prompt": logo_prompt(prompt) }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "1:1",
                "outputMimeType": LOGO_MIME,
            }
        });
        let url = self.model_url(&self.settings.logo_model, "predict");
        let response: PredictResponse = self.post_json(&url, &body, &key).await?;

        let prediction = response
            .predictions
            .into_iter()
            .find(|p| p.bytes_base64_encoded.as_deref().is_some_and(|b| !b.is_empty()))
            .ok_or_else(|| {
                StudioError::ImageGenerationFailed("no image payload returned".to_string())
            })?;

        let image = EmbeddedImage::new(
            prediction.mime_type.unwrap_or_else(|| LOGO_MIME.to_string()),
            prediction.bytes_base64_encoded.unwrap_or_default(),
        );
        info!(size = image.approx_size(), "logo generated");
        Ok(image)
    }

    async fn edit_image(
        &self,
        image: &EmbeddedImage,
        instruction: &str,
    ) -> StudioResult<EmbeddedImage> {
        if instruction.trim().is_empty() {
            return Err(StudioError::ImageEditFailed(
                "edit instruction is empty".to_string(),
            ));
        }
        let key = self.api_key()?;

        let body = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": image.mime_type, "data": image.payload() } },
                    { "text": instruction.trim() }
                ]
            }],
            "generationConfig": { "responseModalities": ["IMAGE"] }
        });
        let url = self.model_url(&self.settings.edit_model, "generateContent");
        let response: GenerateContentResponse = self.post_json(&url, &body, &key).await?;

        let part = response.inline_image().ok_or_else(|| {
            StudioError::ImageEditFailed("no image part in the response".to_string())
        })?;
        let edited = EmbeddedImage::new(
            part.mime_type
                .clone()
                .unwrap_or_else(|| EDIT_RESULT_MIME.to_string()),
            part.data.clone(),
        );
        info!(size = edited.approx_size(), "image edited");
        Ok(edited)
    }

    async fn animate_image(
        &self,
        image: &EmbeddedImage,
        prompt: Option<&str>,
    ) -> StudioResult<VideoClip> {
        if !self.credentials.has_selected_key() {
            return Err(StudioError::MissingCredential);
        }
        let key = self.api_key()?;
        let prompt = prompt
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(&self.settings.animation_prompt);

        let body = json!({
            "instances": [{
                "prompt": prompt,
                "image": {
                    "bytesBase64Encoded": image.payload(),
                    "mimeType": image.mime_type,
                }
            }],
            "parameters": {
                "sampleCount": 1,
                "resolution": "720p",
                "aspectRatio": "16:9",
            }
        });
        let url = self.model_url(&self.settings.video_model, "predictLongRunning");
        let operation: Operation = self.post_json(&url, &body, &key).await?;
        if operation.name.is_empty() && !operation.done {
            return Err(StudioError::VideoGenerationFailed(
                "provider returned no operation handle".to_string(),
            ));
        }
        info!(operation = %operation.name, "video generation started");

        let operation = self.wait_for_operation(operation, &key).await?;
        if let Some(error) = &operation.error {
            return Err(StudioError::VideoGenerationFailed(error.message.clone()));
        }
        let uri = operation
            .video_uri()
            .ok_or_else(|| {
                StudioError::VideoGenerationFailed("no video reference produced".to_string())
            })?
            .to_string();

        let response = self
            .authorized(self.client.get(&uri), &key)
            .query(&[("key", key.as_str())])
            .send()
            .await?;
        let response = check_status(response).await?;
        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.starts_with("video/"))
            .unwrap_or(DEFAULT_VIDEO_MIME)
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        info!(size = bytes.len(), "video downloaded");
        Ok(VideoClip::new(mime, bytes, uri))
    }
}
