// AI configuration type definitions

use serde::Deserialize;

/// Model used when neither config nor CLI names one
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini REST endpoint for model calls
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_remember_key() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// AI connection configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Model identifier sent with every chat request
    #[serde(default = "default_model")]
    pub model: String,
    /// API key used when no key has been remembered locally
    pub api_key: Option<String>,
    /// Whether edits to the API key are mirrored to local storage
    #[serde(default = "default_remember_key")]
    pub remember_key: bool,
    /// Base URL of the Gemini models endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            model: default_model(),
            api_key: None,
            remember_key: default_remember_key(),
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
#[path = "ai_types_tests.rs"]
mod ai_types_tests;
