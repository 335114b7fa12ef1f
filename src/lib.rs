//! sqlquill - natural-language questions to SQL via the Hugging Face
//! Inference API.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod sql;
