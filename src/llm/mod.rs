//! Model invocation for sqlquill.
//!
//! Provides the inference client trait, the Hugging Face implementation, and
//! the prompt/generation logic that turns a [`SqlRequest`] into raw SQL text.

pub mod generator;
pub mod hf;
pub mod mock;
pub mod prompt;
pub mod types;

pub use generator::{generate_sql, InvocationMode, SqlResponse, MAX_NEW_TOKENS};
pub use hf::{HfClient, HfConfig};
pub use mock::MockInferenceClient;
pub use prompt::{build_context, build_instructions, build_prompt};
pub use types::{GenerationParams, Message, Role, SqlRequest};

use async_trait::async_trait;

/// Error signals indicating the model only supports conversational inference.
///
/// Matched against the remote error text as a last resort when no structured
/// error code is present. Matching free-form error text is brittle, so the
/// matched signal is logged when it triggers the fallback.
const CHAT_ONLY_SIGNALS: &[&str] = &["Supported task: conversational", "model_not_supported"];

/// Structured error code for a model that rejects plain text generation.
const CHAT_ONLY_CODE: &str = "model_not_supported";

/// Error from a single model invocation, before classification.
///
/// Carries the remote service's error text verbatim plus the structured error
/// code when the response body included one.
#[derive(Debug, Clone)]
pub struct InvocationError {
    /// Human-readable cause, surfaced to the caller as-is.
    pub message: String,
    /// Structured error code from the response body, if any.
    pub code: Option<String>,
}

impl InvocationError {
    /// Creates an error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Attaches a structured error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the signal that marks this error as "chat-only model", if any.
    ///
    /// The structured code is checked first; the known message substrings are
    /// a fallback for services that only return free-form text.
    pub fn matched_signal(&self) -> Option<&str> {
        if self.code.as_deref() == Some(CHAT_ONLY_CODE) {
            return Some(CHAT_ONLY_CODE);
        }
        CHAT_ONLY_SIGNALS
            .iter()
            .find(|signal| self.message.contains(*signal))
            .copied()
    }

    /// Returns true if the model rejects plain completion and requires the
    /// conversational protocol.
    pub fn requires_chat(&self) -> bool {
        self.matched_signal().is_some()
    }
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Trait for clients that can invoke a hosted model both ways.
///
/// Implementations must be thread-safe (Send + Sync); each call is a single
/// blocking round-trip with no state retained between invocations.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Single-turn text completion for the given prompt.
    ///
    /// Returns the trimmed generated text on success.
    async fn text_generation(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> std::result::Result<String, InvocationError>;

    /// Conversational completion for the given messages.
    ///
    /// Returns the trimmed content of the first response choice on success.
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
        params: &GenerationParams,
    ) -> std::result::Result<String, InvocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_signal_from_code() {
        let err = InvocationError::new("This model is unavailable").with_code("model_not_supported");
        assert_eq!(err.matched_signal(), Some("model_not_supported"));
        assert!(err.requires_chat());
    }

    #[test]
    fn test_matched_signal_from_conversational_substring() {
        let err = InvocationError::new(
            "Task not supported for this model. Supported task: conversational",
        );
        assert_eq!(err.matched_signal(), Some("Supported task: conversational"));
        assert!(err.requires_chat());
    }

    #[test]
    fn test_matched_signal_from_code_substring() {
        let err = InvocationError::new("error: model_not_supported for text-generation");
        assert!(err.requires_chat());
    }

    #[test]
    fn test_unrelated_error_does_not_match() {
        let err = InvocationError::new("503 Service Unavailable");
        assert_eq!(err.matched_signal(), None);
        assert!(!err.requires_chat());
    }

    #[test]
    fn test_unrelated_code_does_not_match() {
        let err = InvocationError::new("rate limited").with_code("rate_limited");
        assert!(!err.requires_chat());
    }

    #[test]
    fn test_display_is_message_verbatim() {
        let err = InvocationError::new("boom").with_code("whatever");
        assert_eq!(err.to_string(), "boom");
    }
}
