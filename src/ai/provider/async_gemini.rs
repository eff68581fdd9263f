//! Async Gemini API client
//!
//! Calls the Google Generative Language `generateContent` endpoint and returns
//! the whole reply at once. Uses reqwest for HTTP and tokio for async runtime.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::AiError;
use crate::chat::conversation::Message;

const PROVIDER: &str = "Gemini";

/// Longest raw error body copied into an error message
const MAX_ERROR_BODY_CHARS: usize = 800;

/// Async Gemini API client
#[derive(Debug, Clone)]
pub struct AsyncGeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    contents: &'a [Message],
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl AsyncGeminiClient {
    /// Create a new async Gemini client
    pub fn new(api_key: String, base_url: String) -> Result<Self, AiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AiError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Returns the stored API key (used in tests)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `contents` to `model` and return the concatenated reply text
    ///
    /// An empty string means the service answered without any text part.
    pub async fn generate_content(
        &self,
        model: &str,
        contents: &[Message],
    ) -> Result<String, AiError> {
        let url = build_url(&self.base_url, model);
        let body = build_request_body(contents)?;

        #[cfg(debug_assertions)]
        log::debug!("Gemini request: model={} contents={}", model, contents.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AiError::Network {
                provider: PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| AiError::Network {
            provider: PROVIDER.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(AiError::Api {
                provider: PROVIDER.to_string(),
                code: status.as_u16(),
                message: extract_error_message(status, &text),
            });
        }

        extract_text(&text)
    }
}

/// `{base_url}/{model}:generateContent`
fn build_url(base_url: &str, model: &str) -> String {
    format!("{}/{}:generateContent", base_url.trim_end_matches('/'), model)
}

fn build_request_body(contents: &[Message]) -> Result<String, AiError> {
    serde_json::to_string(&RequestBody { contents }).map_err(|e| AiError::Parse {
        provider: PROVIDER.to_string(),
        message: format!("Failed to serialize request body: {}", e),
    })
}

/// Join the text parts of the first candidate
fn extract_text(body: &str) -> Result<String, AiError> {
    let parsed: GenerateResponse = serde_json::from_str(body).map_err(|e| AiError::Parse {
        provider: PROVIDER.to_string(),
        message: format!("Invalid response body: {}", e),
    })?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

/// Best available description of a failed call
///
/// Prefers `error.message` from a JSON body, then the raw body, then the
/// status line.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    let api_message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|m| !m.trim().is_empty());
    if let Some(message) = api_message {
        return message;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
            let truncated: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return format!("{}…", truncated);
        }
        return trimmed.to_string();
    }

    status.to_string()
}

#[cfg(test)]
#[path = "async_gemini_tests.rs"]
mod async_gemini_tests;
