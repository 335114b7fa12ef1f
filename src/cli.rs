//! Command-line argument parsing for sqlquill.
//!
//! This is the request boundary: blank schema or question input is rejected
//! here, before any model call happens.

use crate::config::Settings;
use crate::error::{QuillError, Result};
use crate::llm::SqlRequest;
use clap::Parser;
use std::path::PathBuf;

/// Turn natural-language questions into SQL via the Hugging Face Inference API.
#[derive(Parser, Debug)]
#[command(name = "sqlquill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Natural-language question to answer with SQL
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Path to a file containing the database schema
    #[arg(short, long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Model identifier on the Hugging Face Hub
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Target SQL dialect (e.g. PostgreSQL, MySQL, SQLite)
    #[arg(short, long, value_name = "DIALECT")]
    pub dialect: Option<String>,

    /// Sampling temperature between 0 and 1
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Hugging Face access token
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Settings file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Persist model, dialect and temperature as new defaults
    #[arg(long)]
    pub save: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the settings file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_path)
    }

    /// Applies CLI overrides on top of loaded settings.
    pub fn merge_settings(&self, mut settings: Settings) -> Settings {
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(dialect) = &self.dialect {
            settings.dialect = dialect.clone();
        }
        if let Some(temperature) = self.temperature {
            settings.temperature = temperature;
        }
        settings
    }

    /// Builds the generation request after boundary validation.
    ///
    /// Rejects blank schema text, a blank question and an out-of-range
    /// temperature before the core is invoked.
    pub fn to_request(&self, schema: &str, settings: &Settings) -> Result<SqlRequest> {
        if schema.trim().is_empty() {
            return Err(QuillError::request(format!(
                "schema file {} is empty",
                self.schema.display()
            )));
        }
        if self.question.trim().is_empty() {
            return Err(QuillError::request("question must not be empty"));
        }
        if !(0.0..=1.0).contains(&settings.temperature) {
            return Err(QuillError::request(format!(
                "temperature {} is out of range [0, 1]",
                settings.temperature
            )));
        }

        Ok(SqlRequest::new(schema, &self.question)
            .with_dialect(&settings.dialect)
            .with_temperature(settings.temperature)
            .with_model(&settings.model))
    }
}
