//! SQL generation over the two-stage invocation protocol.
//!
//! Issues a plain text-generation call first; when the failure indicates the
//! model only supports conversational inference, retries exactly once as a
//! two-message chat completion. Any other primary failure is surfaced
//! immediately.

use tracing::debug;

use crate::error::{QuillError, Result};
use crate::llm::prompt::{build_context, build_instructions, build_prompt};
use crate::llm::types::{GenerationParams, Message, SqlRequest};
use crate::llm::InferenceClient;

/// Output budget in generated tokens, shared by both protocols.
pub const MAX_NEW_TOKENS: u32 = 600;

/// Which protocol produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Primary single-turn text generation.
    Completion,
    /// Conversational fallback.
    Chat,
}

/// Raw model output attributed to the protocol that produced it.
#[derive(Debug, Clone)]
pub struct SqlResponse {
    /// Trimmed raw model text; feed through the normalizer before display.
    pub text: String,
    /// Protocol that produced the text.
    pub mode: InvocationMode,
}

/// Generates raw SQL text for the given request.
///
/// Failure attribution is unambiguous: a primary failure that is not the
/// chat-only signal surfaces as [`QuillError::Generation`] with the remote
/// cause verbatim; a failed fallback surfaces as [`QuillError::Fallback`].
pub async fn generate_sql(
    client: &dyn InferenceClient,
    request: &SqlRequest,
) -> Result<SqlResponse> {
    let instructions = build_instructions(&request.dialect);
    let context = build_context(&request.schema, &request.question);
    let params = GenerationParams {
        max_new_tokens: MAX_NEW_TOKENS,
        temperature: request.temperature,
    };

    let prompt = build_prompt(&instructions, &context);
    match client.text_generation(&request.model, &prompt, &params).await {
        Ok(text) => Ok(SqlResponse {
            text: text.trim().to_string(),
            mode: InvocationMode::Completion,
        }),
        Err(err) if err.requires_chat() => {
            debug!(
                model = %request.model,
                signal = err.matched_signal().unwrap_or_default(),
                "model rejects plain completion, retrying as chat"
            );
            let messages = [Message::system(instructions), Message::user(context)];
            match client.chat_completion(&request.model, &messages, &params).await {
                Ok(content) => Ok(SqlResponse {
                    text: content.trim().to_string(),
                    mode: InvocationMode::Chat,
                }),
                Err(chat_err) => Err(QuillError::fallback(chat_err.message)),
            }
        }
        Err(err) => Err(QuillError::generation(err.message)),
    }
}
