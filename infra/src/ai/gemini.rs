//! Gemini Client Implementation
//!
//! This module talks to the Google Generative Language REST API. It
//! implements the core `GenerativeBackend` trait for itinerary drafting.
//!
//! ## Features
//!
//! - Single-shot text completion via `generateContent`
//! - Credential probe via the list-models endpoint
//! - Placeholder and length checks on the API key
//! - Security: the key travels in the `x-goog-api-key` header and is never
//!   written to logs

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use wf_core::GenerativeBackend;

use crate::InfrastructureError;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Gemini service configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Google Generative Language API key
    pub api_key: String,
    /// Model name without the `models/` prefix
    pub model: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl GeminiConfig {
    /// Create configuration from environment variables
    ///
    /// A missing, placeholder, or obviously truncated key is a hard error;
    /// the caller decides whether that stops the process.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| InfrastructureError::Config("GEMINI_API_KEY not set".to_string()))?;

        if api_key.starts_with("your_") {
            return Err(InfrastructureError::Config(
                "GEMINI_API_KEY still contains a placeholder value".to_string(),
            ));
        }
        if api_key.len() < 20 {
            return Err(InfrastructureError::Config(
                "GEMINI_API_KEY is too short to be a valid key".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            request_timeout_secs: std::env::var("GEMINI_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Gemini generative backend implementation
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("Gemini client initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Probe the API with a list-models call to confirm the key works
    ///
    /// Called once at startup so a revoked or mistyped key is caught before
    /// the server accepts traffic rather than on the first planning request.
    pub async fn verify_credentials(&self) -> Result<(), InfrastructureError> {
        let url = format!("{}/models", API_BASE_URL);

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let listing: ModelListResponse = response.json().await.unwrap_or_default();
            info!(
                "Gemini API key validated, {} models available",
                listing.models.len()
            );
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(InfrastructureError::Model(format!(
                "Gemini credential check failed with status {}: {}",
                status, body
            )))
        }
    }

    /// Run one completion against the configured model
    async fn generate(&self, prompt: &str) -> Result<String, InfrastructureError> {
        let url = format!(
            "{}/models/{}:generateContent",
            API_BASE_URL, self.config.model
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(
            "Requesting completion from {} ({} prompt chars)",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini request failed: status {} body {}", status, body);
            return Err(InfrastructureError::Model(format!(
                "Gemini returned status {}: {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.first_text().ok_or_else(|| {
            InfrastructureError::Model("Gemini response contained no candidates".to_string())
        })
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, String> {
        self.generate(prompt).await.map_err(|e| e.to_string())
    }

    fn backend_name(&self) -> &str {
        "Gemini"
    }
}

#[derive(Debug, Default, Deserialize)]
struct ModelListResponse {
    #[serde(default)]
    models: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate with all parts concatenated
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Clean up any existing env vars first
        std::env::remove_var("GEMINI_MODEL");
        std::env::remove_var("GEMINI_REQUEST_TIMEOUT_SECS");

        std::env::set_var("GEMINI_API_KEY", "AIzaSyTestKey1234567890abcd");

        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "AIzaSyTestKey1234567890abcd");
        assert_eq!(config.model, "gemini-flash-latest");
        assert_eq!(config.request_timeout_secs, 30);

        // Placeholder keys are rejected
        std::env::set_var("GEMINI_API_KEY", "your_gemini_api_key_here");
        assert!(GeminiConfig::from_env().is_err());

        // Truncated keys are rejected
        std::env::set_var("GEMINI_API_KEY", "AIzaShort");
        assert!(GeminiConfig::from_env().is_err());

        // Missing keys are rejected
        std::env::remove_var("GEMINI_API_KEY");
        assert!(GeminiConfig::from_env().is_err());
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}}
            ]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_text().unwrap(), "Hello world");
    }

    #[test]
    fn test_response_without_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[test]
    fn test_backend_name() {
        let config = GeminiConfig {
            api_key: "AIzaSyTestKey1234567890abcd".to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: 30,
        };

        let client = GeminiClient::new(config).unwrap();
        assert_eq!(client.backend_name(), "Gemini");
    }
}
