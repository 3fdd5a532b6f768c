use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Translation service config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Maximum characters per chunk submitted to the model
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Maximum concurrently in-flight translation requests
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Directory translated documents are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration of the remote completion service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // @field: API key (falls back to OPENAI_API_KEY when empty)
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds per request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TranslationConfig {
    /// Resolve the API key: the configured value wins, otherwise the
    /// OPENAI_API_KEY environment variable. May be empty.
    pub fn api_key_or_env(&self) -> String {
        if !self.api_key.is_empty() {
            self.api_key.clone()
        } else {
            std::env::var("OPENAI_API_KEY").unwrap_or_default()
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level for application logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    // @level: Error
    Error,
    // @level: Warn
    Warn,
    // @level: Info
    #[default]
    Info,
    // @level: Debug
    Debug,
    // @level: Trace
    Trace,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_chunk_size() -> usize {
    3500
}

fn default_max_workers() -> usize {
    4
}

fn default_output_dir() -> String {
    "translated".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation: TranslationConfig::default(),
            chunk_size: default_chunk_size(),
            max_workers: default_max_workers(),
            output_dir: default_output_dir(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.translation.model.is_empty() {
            return Err(anyhow!("Model name cannot be empty"));
        }

        if !(0.0..=2.0).contains(&self.translation.temperature) {
            return Err(anyhow!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.translation.temperature
            ));
        }

        if self.chunk_size == 0 {
            return Err(anyhow!("Chunk size must be greater than zero"));
        }

        if self.max_workers == 0 {
            return Err(anyhow!("Max workers must be greater than zero"));
        }

        if self.translation.endpoint.is_empty() {
            return Err(anyhow!("Endpoint cannot be empty"));
        }

        if self.output_dir.is_empty() {
            return Err(anyhow!("Output directory cannot be empty"));
        }

        Ok(())
    }
}
