//! Gemini REST client
//!
//! Only the two calls the tool needs: `models/{model}:generateContent` for an
//! image and `models` for a listing. The image arrives base64-encoded in the
//! first candidate's `inlineData` part.

use std::future::Future;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{GenerateError, Result};
use crate::jobs::GenerationJob;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Anything that can turn a job into PNG bytes
pub trait ImageGenerator {
    fn generate(&self, job: &GenerationJob) -> impl Future<Output = Result<Vec<u8>>>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: &'static str,
}

impl<'a> GenerateContentRequest<'a> {
    fn for_job(job: &'a GenerationJob) -> Self {
        Self {
            contents: [Content {
                parts: [TextPart { text: job.prompt }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: job.aspect_ratio.as_str(),
                },
            },
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct InlineData {
    data: String,
}

/// Pull the image bytes out of a raw `generateContent` response body
pub fn extract_image(body: &str) -> Result<Vec<u8>> {
    let no_image = || GenerateError::NoImageData {
        response: body.to_string(),
    };
    let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|_| no_image())?;
    let data = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.inline_data))
        .map(|inline| inline.data)
        .ok_or_else(no_image)?;
    Ok(STANDARD.decode(data)?)
}

/// One entry of `GET /models`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    pub fn models_url(&self) -> String {
        format!("{}/models", self.api_base)
    }

    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let response = self
            .http
            .get(self.models_url())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let list: ModelList = response.json().await?;
        Ok(list.models)
    }
}

impl ImageGenerator for GeminiClient {
    async fn generate(&self, job: &GenerationJob) -> Result<Vec<u8>> {
        log::debug!("POST {} for {}", self.generate_url(), job.name);
        let response = self
            .http
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::for_job(job))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }
        extract_image(&body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::jobs::AspectRatio;

    #[test]
    fn request_body_matches_wire_format() {
        let job = GenerationJob {
            name: "t",
            prompt: "a cat",
            aspect_ratio: AspectRatio::Portrait,
        };
        let body = serde_json::to_value(GenerateContentRequest::for_job(&job)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "a cat" }] }],
                "generationConfig": { "imageConfig": { "aspectRatio": "3:4" } }
            })
        );
    }

    #[test]
    fn image_found_after_a_text_part() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0K" } }
                ]}
            }]
        })
        .to_string();
        let bytes = extract_image(&body).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn text_only_response_keeps_raw_payload() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"no"}]}}]}"#;
        match extract_image(body) {
            Err(GenerateError::NoImageData { response }) => assert_eq!(response, body),
            other => panic!("expected NoImageData, got {other:?}"),
        }
    }

    #[test]
    fn empty_and_malformed_bodies_have_no_image() {
        assert!(matches!(extract_image("{}"), Err(GenerateError::NoImageData { .. })));
        assert!(matches!(extract_image("not json"), Err(GenerateError::NoImageData { .. })));
    }

    #[test]
    fn bad_base64_is_a_decode_error() {
        let body = r#"{"candidates":[{"content":{"parts":[{"inlineData":{"data":"!!!"}}]}}]}"#;
        assert!(matches!(extract_image(body), Err(GenerateError::Decode(_))));
    }

    #[test]
    fn urls_are_built_from_base_and_model() {
        let mut config = Config::with_api_key("k");
        config.api_base = "http://localhost:9/v1beta/".into();
        let client = GeminiClient::new(&config);
        assert_eq!(
            client.generate_url(),
            "http://localhost:9/v1beta/models/nano-banana-pro-preview:generateContent"
        );
        assert_eq!(client.models_url(), "http://localhost:9/v1beta/models");
    }
}
