//! AI provider abstraction
//!
//! Defines the AsyncAiProvider enum, AiError types, and the factory that turns
//! an API key into a ready-to-use client.

use thiserror::Error;

use crate::chat::conversation::Message;

mod async_gemini;

pub use async_gemini::AsyncGeminiClient;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    /// No usable API key
    #[error("AI not configured: {message}")]
    NotConfigured { message: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// Network error during API request
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// API returned an error response
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse API response
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },
}

/// Coarse classification of an [`AiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential; nothing was sent
    Configuration,
    /// The remote call failed or returned something unusable
    Request,
    /// The local HTTP client could not be created
    ClientConstruction,
}

impl AiError {
    /// Human-readable text shown in the error line and chat notices
    pub fn message(&self) -> &str {
        match self {
            AiError::NotConfigured { message }
            | AiError::ClientBuild { message }
            | AiError::Network { message, .. }
            | AiError::Api { message, .. }
            | AiError::Parse { message, .. } => message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AiError::NotConfigured { .. } => ErrorKind::Configuration,
            AiError::ClientBuild { .. } => ErrorKind::ClientConstruction,
            AiError::Network { .. } | AiError::Api { .. } | AiError::Parse { .. } => {
                ErrorKind::Request
            }
        }
    }
}

/// Async AI provider implementations
#[derive(Debug, Clone)]
pub enum AsyncAiProvider {
    /// Google Gemini API (async)
    Gemini(AsyncGeminiClient),
}

impl AsyncAiProvider {
    /// Returns the display name of the provider
    pub fn provider_name(&self) -> &'static str {
        match self {
            AsyncAiProvider::Gemini(_) => "Gemini",
        }
    }

    /// Create a provider from a credential
    ///
    /// Returns `NotConfigured` for a blank key and `ClientBuild` when the HTTP
    /// client cannot be created.
    pub fn from_credential(api_key: &str, base_url: &str) -> Result<Self, AiError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AiError::NotConfigured {
                message: "Missing Gemini API key".to_string(),
            });
        }

        let client = AsyncGeminiClient::new(api_key.to_string(), base_url.to_string())?;
        Ok(AsyncAiProvider::Gemini(client))
    }

    /// Run one non-streaming completion and return the reply text
    pub async fn generate_content(
        &self,
        model: &str,
        contents: &[Message],
    ) -> Result<String, AiError> {
        match self {
            AsyncAiProvider::Gemini(client) => client.generate_content(model, contents).await,
        }
    }
}

/// Build a client for `api_key`, or `None` when no usable client exists
///
/// Construction failures are logged rather than surfaced; callers treat a
/// missing client as "not configured".
pub fn make_client(api_key: &str, base_url: &str) -> Option<AsyncAiProvider> {
    match AsyncAiProvider::from_credential(api_key, base_url) {
        Ok(provider) => Some(provider),
        Err(AiError::NotConfigured { .. }) => None,
        Err(e) => {
            log::error!("Failed to create AI client: {}", e);
            None
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
