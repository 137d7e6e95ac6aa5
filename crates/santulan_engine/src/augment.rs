//! Optional generative augmentation for the reflection+insight slot.
//!
//! The augmentor is a soft dependency: every call is bounded by a timeout
//! and any failure collapses to `None`, which the composer treats as "use
//! the rule-based templates". The engine runs correctly with
//! [`NoopAugmentor`] wired in.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use santulan_core::{AnalysisResult, AugmentConfig, Augmentor, ConversationExchange, Language};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Run the augmentor under the configured deadline. Timeouts, errors and
/// empty output all mean "unavailable".
pub async fn bounded(
    augmentor: &dyn Augmentor,
    deadline: Duration,
    user_message: &str,
    analysis: &AnalysisResult,
    recent: &[ConversationExchange],
) -> Option<String> {
    match tokio::time::timeout(deadline, augmentor.augment(user_message, analysis, recent)).await {
        Ok(Ok(Some(text))) if !text.trim().is_empty() => Some(text),
        Ok(Ok(_)) => None,
        Ok(Err(e)) => {
            tracing::debug!("Augmentation unavailable: {}", e);
            None
        }
        Err(_) => {
            tracing::warn!("Augmentation timed out after {:?}", deadline);
            None
        }
    }
}

/// Always unavailable. The default wiring; proves the rule-based fallback
/// path is load-bearing.
#[derive(Debug, Clone, Default)]
pub struct NoopAugmentor;

#[async_trait]
impl Augmentor for NoopAugmentor {
    async fn augment(
        &self,
        _user_message: &str,
        _analysis: &AnalysisResult,
        _recent: &[ConversationExchange],
    ) -> Result<Option<String>> {
        Ok(None)
    }
}

const SYSTEM_PROMPT: &str = "You are the reflective voice of a mental wellness companion. \
Your persona is a wise, empathetic friend who mirrors the user's struggle and offers one \
small perspective shift. Be steady and grounded. NEVER provide medical advice or diagnosis; \
you are a wellness companion, not a clinician.";

/// Gemini-backed augmentor.
///
/// The credential comes from `GEMINI_API_KEY`; a missing key means the
/// augmentor is simply not constructed and the engine stays rule-based.
#[derive(Debug, Clone)]
pub struct GeminiAugmentor {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiAugmentor {
    pub fn new(model: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Construct from the environment, or `None` when no credential is
    /// configured.
    pub fn from_env(config: &AugmentConfig) -> Option<Self> {
        match env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => Some(Self::new(&config.model, &key)),
            _ => {
                tracing::info!("GEMINI_API_KEY not set, running rule-based only");
                None
            }
        }
    }

    fn build_prompt(
        user_message: &str,
        analysis: &AnalysisResult,
        recent: &[ConversationExchange],
    ) -> String {
        let history = recent
            .iter()
            .map(|c| format!("User: {}\nAI: {}", c.user_message, c.ai_response))
            .collect::<Vec<_>>()
            .join("\n");
        let emotion = analysis
            .dominant()
            .map(|d| d.name.as_str())
            .unwrap_or("Neutral");
        let language = match analysis.language {
            Language::En => "English",
            Language::Hi => "Hindi (mix with English if natural)",
        };
        format!(
            "Detected emotion: {emotion}\n\n\
             Context from past interactions:\n{history}\n\n\
             Current user message: \"{user_message}\"\n\n\
             TASK: Provide a short Reflection that mirrors their struggle and one Insight \
             that offers a small perspective shift. Keep it to 3-4 sentences, no preamble. \
             Respond in {language}."
        )
    }
}

#[async_trait]
impl Augmentor for GeminiAugmentor {
    async fn augment(
        &self,
        user_message: &str,
        analysis: &AnalysisResult,
        recent: &[ConversationExchange],
    ) -> Result<Option<String>> {
        let base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let request = GenerateContentRequest {
            system_instruction: ContentPayload {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![ContentPayload {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Self::build_prompt(user_message, analysis, recent),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, body);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: ContentPayload,
    contents: Vec<ContentPayload>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::EmotionScorer;
    use santulan_core::EngineConfig;

    struct SlowAugmentor;

    #[async_trait]
    impl Augmentor for SlowAugmentor {
        async fn augment(
            &self,
            _user_message: &str,
            _analysis: &AnalysisResult,
            _recent: &[ConversationExchange],
        ) -> Result<Option<String>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Some("too late".to_string()))
        }
    }

    struct FailingAugmentor;

    #[async_trait]
    impl Augmentor for FailingAugmentor {
        async fn augment(
            &self,
            _user_message: &str,
            _analysis: &AnalysisResult,
            _recent: &[ConversationExchange],
        ) -> Result<Option<String>> {
            anyhow::bail!("service down")
        }
    }

    fn analysis() -> AnalysisResult {
        EmotionScorer::new(&EngineConfig::default().emotions).analyze("I feel sad")
    }

    #[tokio::test]
    async fn noop_is_unavailable() {
        let result = bounded(&NoopAugmentor, Duration::from_secs(1), "hi", &analysis(), &[]).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn errors_collapse_to_none() {
        let result =
            bounded(&FailingAugmentor, Duration::from_secs(1), "hi", &analysis(), &[]).await;
        assert!(result.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_is_cut_off_by_deadline() {
        let result = bounded(&SlowAugmentor, Duration::from_secs(5), "hi", &analysis(), &[]).await;
        assert!(result.is_none());
    }

    #[test]
    fn prompt_includes_history_and_language() {
        let recent = vec![ConversationExchange {
            timestamp: chrono::Utc::now(),
            user_message: "long week".to_string(),
            ai_response: "tell me more".to_string(),
            detected_emotion: "Stress".to_string(),
        }];
        let prompt = GeminiAugmentor::build_prompt("still tired", &analysis(), &recent);
        assert!(prompt.contains("User: long week"));
        assert!(prompt.contains("Detected emotion: Sadness"));
        assert!(prompt.contains("Respond in English."));
    }

    #[test]
    fn response_parsing_takes_first_candidate() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":" reflected text "}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string());
        assert_eq!(text.as_deref(), Some("reflected text"));
    }
}
