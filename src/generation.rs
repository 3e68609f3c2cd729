//! Generation client for GameSmith
//!
//! Turns a natural-language prompt (plus optional existing code) into a
//! [`GameCode`] by building the right instruction template, calling the
//! provider, and validating the structured JSON result. Purely functional
//! given its inputs; the only side effect is the provider's network call.

use crate::error::{GameSmithError, Result};
use crate::game::GameCode;
use crate::prompts;
use crate::providers::Provider;

use regex::Regex;

/// Matches an optional surrounding markdown code fence, with or without a
/// `json` language tag.
const FENCE_PATTERN: &str = r"(?s)^```(?:json)?\s*\n?(.*?)\n?\s*```$";

/// Client for producing game code from prompts
///
/// Wraps a [`Provider`] and owns the request/response contract: template
/// selection, fence stripping, and the `{html, css, js}` shape check.
pub struct GenerationClient {
    provider: Box<dyn Provider>,
}

impl GenerationClient {
    /// Create a client over the given provider
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Produce a `GameCode` from a prompt, from scratch or as a revision
    ///
    /// The revision template is used iff `existing` is present and has at
    /// least one non-empty source field; its `html`/`css`/`js` are embedded
    /// verbatim in the instruction. The caller is expected to trim the
    /// prompt and reject empty input before calling.
    ///
    /// # Errors
    ///
    /// * [`GameSmithError::Transport`] for network/auth/quota failures
    /// * [`GameSmithError::MalformedResponse`] when the response does not
    ///   satisfy the JSON contract, carrying a bounded raw-text prefix
    pub async fn generate(&self, prompt: &str, existing: Option<&GameCode>) -> Result<GameCode> {
        let revising = existing.map(|c| c.has_content()).unwrap_or(false);
        let instruction = prompts::build_instruction(prompt, existing);

        tracing::info!(
            "Requesting {} for prompt ({} chars)",
            if revising { "revision" } else { "new game" },
            prompt.len()
        );

        let raw = self.provider.complete(&instruction).await?;
        let sources = parse_sources(&raw)?;

        // The model is not trusted with identity: a revision keeps the
        // existing id/name, a new game gets a fresh id and a prompt-derived
        // name.
        let (id, name) = match if revising { existing } else { None } {
            Some(code) => (
                code.id.clone(),
                if code.name.is_empty() {
                    derive_name(prompt)
                } else {
                    code.name.clone()
                },
            ),
            None => (uuid::Uuid::new_v4().to_string(), derive_name(prompt)),
        };

        Ok(GameCode {
            id,
            name,
            html: sources.html,
            css: sources.css,
            js: sources.js,
        })
    }
}

/// The three validated source strings from one model response
struct Sources {
    html: String,
    css: String,
    js: String,
}

/// Strip an optional surrounding code-fence wrapper from raw model text
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let fence = Regex::new(FENCE_PATTERN).expect("fence pattern is valid");
    match fence.captures(trimmed) {
        Some(caps) => caps.get(1).map(|m| m.as_str().trim()).unwrap_or(trimmed),
        None => trimmed,
    }
}

/// Parse and shape-check one raw response into the three source strings
///
/// The shape check is explicit: the parsed value must be an object whose
/// `html`, `css`, and `js` members are all strings. Anything else is a
/// malformed response carrying a bounded prefix of the raw text.
fn parse_sources(raw: &str) -> Result<Sources> {
    let clean = strip_code_fence(raw);

    let value: serde_json::Value = match serde_json::from_str(clean) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Model response was not valid JSON: {}", e);
            return Err(GameSmithError::malformed_response(raw).into());
        }
    };

    let obj = match value.as_object() {
        Some(o) => o,
        None => return Err(GameSmithError::malformed_response(raw).into()),
    };

    let field = |key: &str| -> Option<String> {
        obj.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
    };

    match (field("html"), field("css"), field("js")) {
        (Some(html), Some(css), Some(js)) => Ok(Sources { html, css, js }),
        _ => {
            tracing::warn!("Model response is missing string html/css/js fields");
            Err(GameSmithError::malformed_response(raw).into())
        }
    }
}

/// Derive a game name from the prompt text, falling back to the default
fn derive_name(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        crate::game::UNTITLED_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Provider;
    use async_trait::async_trait;

    /// Provider returning a fixed canned response
    struct FixedProvider {
        response: String,
    }

    impl FixedProvider {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
            }
        }
    }

    #[async_trait]
    impl Provider for FixedProvider {
        async fn complete(&self, _instruction: &str) -> Result<String> {
            Ok(self.response.clone())
        }
    }

    /// Provider that records the instructions it was given
    struct RecordingProvider {
        seen: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
        response: String,
    }

    #[async_trait]
    impl Provider for RecordingProvider {
        async fn complete(&self, instruction: &str) -> Result<String> {
            self.seen.lock().unwrap().push(instruction.to_string());
            Ok(self.response.clone())
        }
    }

    const PONG_RESPONSE: &str =
        r##"{"html":"<div id=game></div>","css":"#game{color:red}","js":"console.log(1)"}"##;

    fn client_with(response: &str) -> GenerationClient {
        GenerationClient::new(Box::new(FixedProvider::new(response)))
    }

    fn assert_malformed(err: anyhow::Error) {
        let err = err.downcast::<GameSmithError>().unwrap();
        assert!(matches!(err, GameSmithError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_generate_new_game_from_plain_json() {
        let client = client_with(PONG_RESPONSE);
        let code = client.generate("A simple Pong game", None).await.unwrap();
        assert_eq!(code.html, "<div id=game></div>");
        assert_eq!(code.css, "#game{color:red}");
        assert_eq!(code.js, "console.log(1)");
        assert_eq!(code.name, "A simple Pong game");
        assert!(!code.id.is_empty());
    }

    #[tokio::test]
    async fn test_generate_parses_fenced_json_response() {
        let fenced = format!("```json\n{}\n```", PONG_RESPONSE);
        let client = client_with(&fenced);
        let code = client.generate("A simple Pong game", None).await.unwrap();
        assert_eq!(code.html, "<div id=game></div>");
        assert_eq!(code.js, "console.log(1)");
    }

    #[tokio::test]
    async fn test_generate_parses_bare_fence_response() {
        let fenced = format!("```\n{}\n```", PONG_RESPONSE);
        let client = client_with(&fenced);
        let code = client.generate("Pong", None).await.unwrap();
        assert_eq!(code.css, "#game{color:red}");
    }

    #[tokio::test]
    async fn test_generate_non_json_is_malformed_response() {
        let client = client_with("not json at all");
        let err = client.generate("Pong", None).await.unwrap_err();
        assert_malformed(err);
    }

    #[tokio::test]
    async fn test_generate_missing_js_field_is_malformed_response() {
        let client = client_with(r#"{"html":"a","css":"b"}"#);
        let err = client.generate("Pong", None).await.unwrap_err();
        assert_malformed(err);
    }

    #[tokio::test]
    async fn test_generate_non_string_field_is_malformed_response() {
        let client = client_with(r#"{"html":"a","css":"b","js":42}"#);
        let err = client.generate("Pong", None).await.unwrap_err();
        assert_malformed(err);
    }

    #[tokio::test]
    async fn test_generate_json_array_is_malformed_response() {
        let client = client_with(r#"["html","css","js"]"#);
        let err = client.generate("Pong", None).await.unwrap_err();
        assert_malformed(err);
    }

    #[tokio::test]
    async fn test_malformed_error_carries_bounded_excerpt() {
        let raw = format!("garbage {}", "y".repeat(5000));
        let client = client_with(&raw);
        let err = client.generate("Pong", None).await.unwrap_err();
        let err = err.downcast::<GameSmithError>().unwrap();
        match err {
            GameSmithError::MalformedResponse { excerpt } => {
                assert!(excerpt.starts_with("garbage"));
                assert_eq!(excerpt.chars().count(), crate::error::RAW_EXCERPT_LIMIT);
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_revision_keeps_existing_identity() {
        let existing = GameCode {
            id: "stable-id".to_string(),
            name: "Pong".to_string(),
            html: "<div></div>".to_string(),
            css: String::new(),
            js: String::new(),
        };
        let client = client_with(PONG_RESPONSE);
        let code = client
            .generate("Make the ball red", Some(&existing))
            .await
            .unwrap();
        assert_eq!(code.id, "stable-id");
        assert_eq!(code.name, "Pong");
    }

    #[tokio::test]
    async fn test_empty_existing_is_treated_as_new_game() {
        let existing = GameCode {
            id: "stale-id".to_string(),
            ..Default::default()
        };
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let client = GenerationClient::new(Box::new(RecordingProvider {
            seen: seen.clone(),
            response: PONG_RESPONSE.to_string(),
        }));

        let code = client.generate("Snake", Some(&existing)).await.unwrap();
        // New identity, not the stale one.
        assert_ne!(code.id, "stale-id");
        assert_eq!(code.name, "Snake");

        let instructions = seen.lock().unwrap();
        assert_eq!(instructions.len(), 1);
        assert!(!instructions[0].contains("Current HTML"));
    }

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fence_multiline_payload() {
        let raw = "```json\n{\n  \"a\": 1\n}\n```";
        assert_eq!(strip_code_fence(raw), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_derive_name_defaults_when_blank() {
        assert_eq!(derive_name("   "), crate::game::UNTITLED_NAME);
        assert_eq!(derive_name(" Pong "), "Pong");
    }
}
