//! Error types for sqlquill.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for sqlquill operations.
#[derive(Error, Debug)]
pub enum QuillError {
    /// The primary text-generation call failed for a reason other than the
    /// model requiring conversational inference.
    #[error("Text generation failed: {0}")]
    Generation(String),

    /// The chat-completion fallback itself failed.
    #[error("Chat inference also failed: {0}")]
    Fallback(String),

    /// Configuration errors (invalid config file, missing token, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid request input (blank schema, blank question, bad temperature).
    #[error("Invalid request: {0}")]
    Request(String),
}

impl QuillError {
    /// Creates a generation error with the given message.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Creates a fallback error with the given message.
    pub fn fallback(msg: impl Into<String>) -> Self {
        Self::Fallback(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a request error with the given message.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Generation(_) => "Generation Error",
            Self::Fallback(_) => "Fallback Error",
            Self::Config(_) => "Configuration Error",
            Self::Request(_) => "Request Error",
        }
    }
}

/// Result type alias using QuillError.
pub type Result<T> = std::result::Result<T, QuillError>;
