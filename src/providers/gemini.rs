//! Gemini provider implementation for GameSmith
//!
//! Implements the [`Provider`] trait against the Gemini `generateContent`
//! HTTP API. Every call requests a JSON-typed response at a fixed sampling
//! temperature; model output parsing happens in the generation client, not
//! here.

use crate::config::ProviderConfig;
use crate::error::{GameSmithError, Result};
use crate::providers::Provider;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini API provider
///
/// Connects to the Gemini `generateContent` endpoint (or a mock server via
/// the config's `api_base` override). Construction fails with a
/// configuration error when no API key is available, so credential problems
/// surface before any network call is attempted.
///
/// # Examples
///
/// ```no_run
/// use gamesmith::config::ProviderConfig;
/// use gamesmith::providers::{GeminiProvider, Provider};
///
/// # async fn example() -> gamesmith::error::Result<()> {
/// let mut config = ProviderConfig::default();
/// config.api_key = Some("key".to_string());
/// let provider = GeminiProvider::new(&config)?;
/// let raw = provider.complete("Describe a Pong game as JSON").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GeminiProvider {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    temperature: f32,
}

/// Request structure for the generateContent endpoint
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

/// One content block of a request or response
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

/// One text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Sampling configuration sent with every request
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    temperature: f32,
}

/// Response structure from the generateContent endpoint
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One candidate completion
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiProvider {
    /// Create a new Gemini provider instance
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set (config file or
    /// `GEMINI_API_KEY`), or if HTTP client initialization fails.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GameSmithError::Configuration(
                    "GEMINI_API_KEY is not configured; the generator cannot run without it"
                        .to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("gamesmith/0.2.0")
            .build()
            .map_err(|e| {
                GameSmithError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        tracing::info!(
            "Initialized Gemini provider: model={}, temperature={}",
            config.model,
            config.temperature
        );

        Ok(Self {
            client,
            api_base,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn complete(&self, instruction: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: instruction.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                temperature: self.temperature,
            },
        };

        let url = self.endpoint();
        tracing::debug!("Sending generateContent request: model={}", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Gemini request failed: {}", e);
                GameSmithError::Transport(format!("Gemini API request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini returned error {}: {}", status, error_text);
            return Err(GameSmithError::Transport(format!(
                "Gemini returned error {}: {}",
                status, error_text
            ))
            .into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse generateContent envelope: {}", e);
            GameSmithError::Transport(format!("Failed to parse Gemini response: {}", e))
        })?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GameSmithError::Transport(
                "Gemini returned no candidates".to_string(),
            )
            .into());
        }

        Ok(text)
    }
}
