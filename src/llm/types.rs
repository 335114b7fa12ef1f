//! Request and message types for model invocations.

use serde::{Deserialize, Serialize};

/// Default SQL dialect when the caller does not specify one.
pub const DEFAULT_DIALECT: &str = "PostgreSQL";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message providing context and instructions.
    System,
    /// User message (human input).
    User,
    /// Assistant message (model response).
    Assistant,
}

impl Role {
    /// Returns the role as a string for API requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: Role,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Sampling parameters shared by both invocation protocols.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    /// Output budget in generated tokens.
    pub max_new_tokens: u32,
    /// Sampling temperature in [0, 1].
    pub temperature: f32,
}

/// A single SQL-generation request.
///
/// Immutable once built; one per invocation. The access token is not part of
/// the request, it is threaded into the client instead.
#[derive(Debug, Clone)]
pub struct SqlRequest {
    /// Database schema as plain text (not validated for syntax).
    pub schema: String,
    /// Natural-language question.
    pub question: String,
    /// Target SQL dialect, embedded verbatim in the instruction block.
    pub dialect: String,
    /// Sampling temperature in [0, 1].
    pub temperature: f32,
    /// Model identifier on the Hugging Face Hub.
    pub model: String,
}

impl SqlRequest {
    /// Creates a request with default dialect, temperature and model.
    pub fn new(schema: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            question: question.into(),
            dialect: DEFAULT_DIALECT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Sets the target SQL dialect.
    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
