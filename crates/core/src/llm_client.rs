//! The seam between the content services and the generative-text backend.
//!
//! [`LlmClient`] abstracts the backend so the live content service can be
//! exercised against a simulated client in tests; [`GeminiClient`] is the
//! production implementation speaking the Gemini `generateContent` REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A failure while talking to the completion backend. These never reach the
/// end user; the content service maps them to fixed copy and logs the detail.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("backend returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("backend response contained no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A generic client for one-shot text completion.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Requests a completion constrained to the given JSON `schema` and
    /// returns the raw response text (expected to be a JSON document).
    async fn generate_json(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: Value,
        temperature: f32,
    ) -> Result<String, BackendError>;

    /// Requests a free-text completion.
    async fn generate_text(
        &self,
        system_instruction: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, BackendError>;
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Production [`LlmClient`] for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a client for the hosted Gemini API.
    ///
    /// * `api_key` - the credential resolved by the availability gate.
    /// * `model` - the model identifier, e.g. "gemini-2.5-flash".
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: GEMINI_API_BASE.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Overrides the API base URL, for pointing at a local stand-in server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate(&self, request: &GenerateContentRequest<'_>) -> Result<String, BackendError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(BackendError::EmptyResponse)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_json(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: Value,
        temperature: f32,
    ) -> Result<String, BackendError> {
        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            system_instruction: Content { parts: vec![Part { text: system_instruction }] },
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: Some("application/json"),
                response_schema: Some(schema),
            },
        };
        self.generate(&request).await
    }

    async fn generate_text(
        &self,
        system_instruction: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, BackendError> {
        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            system_instruction: Content { parts: vec![Part { text: system_instruction }] },
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: None,
                response_schema: None,
            },
        };
        self.generate(&request).await
    }
}
