//! Mock inference client for testing.
//!
//! Returns scripted results and records every call so tests can assert on
//! the exact invocation sequence without making real API calls.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::llm::types::{GenerationParams, Message};
use crate::llm::{InferenceClient, InvocationError};

/// A recorded text-generation call.
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub model: String,
    pub prompt: String,
    pub params: GenerationParams,
}

/// A recorded chat-completion call.
#[derive(Debug, Clone)]
pub struct ChatCall {
    pub model: String,
    pub messages: Vec<Message>,
    pub params: GenerationParams,
}

/// Scripted mock implementation of [`InferenceClient`].
#[derive(Debug, Default)]
pub struct MockInferenceClient {
    completion_result: Option<std::result::Result<String, InvocationError>>,
    chat_result: Option<std::result::Result<String, InvocationError>>,
    completion_calls: Mutex<Vec<CompletionCall>>,
    chat_calls: Mutex<Vec<ChatCall>>,
}

impl MockInferenceClient {
    /// Creates a mock with no scripted results; unscripted calls error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful text-generation response.
    pub fn with_completion(mut self, response: impl Into<String>) -> Self {
        self.completion_result = Some(Ok(response.into()));
        self
    }

    /// Scripts a failing text-generation response.
    pub fn with_completion_error(mut self, message: impl Into<String>, code: Option<&str>) -> Self {
        let mut err = InvocationError::new(message);
        if let Some(code) = code {
            err = err.with_code(code);
        }
        self.completion_result = Some(Err(err));
        self
    }

    /// Scripts a successful chat-completion response.
    pub fn with_chat(mut self, response: impl Into<String>) -> Self {
        self.chat_result = Some(Ok(response.into()));
        self
    }

    /// Scripts a failing chat-completion response.
    pub fn with_chat_error(mut self, message: impl Into<String>) -> Self {
        self.chat_result = Some(Err(InvocationError::new(message)));
        self
    }

    /// Returns all recorded text-generation calls.
    pub fn completion_calls(&self) -> Vec<CompletionCall> {
        self.completion_calls.lock().unwrap().clone()
    }

    /// Returns all recorded chat-completion calls.
    pub fn chat_calls(&self) -> Vec<ChatCall> {
        self.chat_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn text_generation(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> std::result::Result<String, InvocationError> {
        self.completion_calls.lock().unwrap().push(CompletionCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
            params: *params,
        });

        self.completion_result
            .clone()
            .unwrap_or_else(|| Err(InvocationError::new("no completion scripted")))
    }

    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> std::result::Result<String, InvocationError> {
        self.chat_calls.lock().unwrap().push(ChatCall {
            model: model.to_string(),
            messages: messages.to_vec(),
            params: *params,
        });

        self.chat_result
            .clone()
            .unwrap_or_else(|| Err(InvocationError::new("no chat response scripted")))
    }
}
