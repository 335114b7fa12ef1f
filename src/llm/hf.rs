//! Hugging Face Inference API client.
//!
//! Implements both invocation protocols against the hosted inference
//! endpoints: plain text generation at `/models/{model}` and OpenAI-style
//! chat completions at `/models/{model}/v1/chat/completions`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{QuillError, Result};
use crate::llm::types::{GenerationParams, Message};
use crate::llm::{InferenceClient, InvocationError};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Hugging Face Inference API base URL.
const HF_API_URL: &str = "https://api-inference.huggingface.co";

/// Hugging Face client configuration.
#[derive(Debug, Clone)]
pub struct HfConfig {
    /// Access token sent as a bearer credential. Accepted opaque, never
    /// validated locally.
    pub token: String,
    /// Base URL for the Inference API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl HfConfig {
    /// Creates a new config with the given access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: HF_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Hugging Face Inference API client.
#[derive(Debug, Clone)]
pub struct HfClient {
    config: HfConfig,
    client: Client,
}

impl HfClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: HfConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| QuillError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Creates a client from environment variables.
    ///
    /// Reads `HF_TOKEN` for the access token.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("HF_TOKEN")
            .map_err(|_| QuillError::config("HF_TOKEN environment variable not set"))?;

        Self::new(HfConfig::new(token))
    }

    /// Returns the text-generation endpoint URL for a model.
    fn generation_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.config.base_url, model)
    }

    /// Returns the chat-completions endpoint URL for a model.
    fn chat_url(&self, model: &str) -> String {
        format!("{}/models/{}/v1/chat/completions", self.config.base_url, model)
    }

    /// Parses an API error response body into an invocation error.
    ///
    /// Keeps the remote error text verbatim and attaches the structured
    /// `error_type` code when the body carries one.
    fn parse_error(status: reqwest::StatusCode, body: &str) -> InvocationError {
        if let Ok(response) = serde_json::from_str::<HfErrorResponse>(body) {
            let mut err = InvocationError::new(response.error);
            if let Some(code) = response.error_type {
                err = err.with_code(code);
            }
            return err;
        }

        InvocationError::new(format!("Inference API error ({status}): {body}"))
    }

    /// Maps a transport-level failure into an invocation error.
    fn request_error(error: reqwest::Error) -> InvocationError {
        if error.is_timeout() {
            InvocationError::new("Request timed out")
        } else if error.is_connect() {
            InvocationError::new("Failed to connect to the Inference API")
        } else {
            InvocationError::new(format!("Request failed: {error}"))
        }
    }

    /// Converts internal messages to the chat API format.
    fn convert_messages(messages: &[Message]) -> Vec<ChatMessage> {
        messages
            .iter()
            .map(|m| ChatMessage {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl InferenceClient for HfClient {
    async fn text_generation(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> std::result::Result<String, InvocationError> {
        let request = TextGenerationRequest {
            inputs: prompt,
            parameters: TextGenerationParameters {
                max_new_tokens: params.max_new_tokens,
                temperature: params.temperature,
                return_full_text: false,
            },
        };

        debug!(model, "text-generation request");
        let response = self
            .client
            .post(self.generation_url(model))
            .header("Authorization", format!("Bearer {}", self.config.token))
            .json(&request)
            .send()
            .await
            .map_err(Self::request_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| InvocationError::new(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::parse_error(status, &body));
        }

        let outputs: Vec<TextGenerationOutput> = serde_json::from_str(&body)
            .map_err(|e| InvocationError::new(format!("Failed to parse response: {e}")))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text.trim().to_string())
            .ok_or_else(|| InvocationError::new("Empty response from text generation"))
    }

    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> std::result::Result<String, InvocationError> {
        let request = ChatRequest {
            model,
            messages: Self::convert_messages(messages),
            max_tokens: params.max_new_tokens,
            temperature: params.temperature,
        };

        debug!(model, "chat-completion request");
        let response = self
            .client
            .post(self.chat_url(model))
            .header("Authorization", format!("Bearer {}", self.config.token))
            .json(&request)
            .send()
            .await
            .map_err(Self::request_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| InvocationError::new(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::parse_error(status, &body));
        }

        let response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| InvocationError::new(format!("Failed to parse response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| InvocationError::new("Empty response from chat completion"))
    }
}

// Inference API types

#[derive(Debug, Serialize)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: TextGenerationParameters,
}

#[derive(Debug, Serialize)]
struct TextGenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct TextGenerationOutput {
    generated_text: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct HfErrorResponse {
    error: String,
    error_type: Option<String>,
}
