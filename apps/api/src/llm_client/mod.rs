//! LLM Client — the single point of entry for all Groq API calls in LeadForge.
//!
//! ARCHITECTURAL RULE: No other module may call the Groq API directly.
//! All remote generation MUST go through the `TextGenerator` trait.
//!
//! Model: llama-3.3-70b-versatile (hardcoded — do not make configurable to prevent drift)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::generation::sampler::{select_tone, Mode};

pub mod prompts;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all remote generation calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const MAX_TOKENS: u32 = 1200;
const TOP_P: f64 = 0.95;
/// Single-attempt deadline. There is no retry policy: one timeout-bounded
/// attempt, then fail-fast to the local fallback.
const REQUEST_TIMEOUT_SECS: u64 = 12;

/// Failure taxonomy for the remote call. None of these propagate past this
/// module — `TextGenerator::generate` normalizes all of them to `None`.
#[derive(Debug, Error)]
enum LlmError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Remote text generation seam.
///
/// `AppState` carries an `Arc<dyn TextGenerator>` so tests can swap in a stub.
/// Implementations never fail the caller: any problem — missing credential,
/// transport failure, rejection, malformed body — collapses to `None`, which
/// callers answer with the local fallback engine.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        mode: Mode,
        seed: Option<u32>,
    ) -> Option<String>;
}

/// The production `TextGenerator` backed by the Groq chat-completions API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn try_generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        mode: Mode,
        seed: Option<u32>,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let tone = select_tone(mode, seed);
        let system = format!(
            "{system_prompt}\n\n{}",
            prompts::TONE_DIRECTIVE_TEMPLATE.replace("{tone}", tone)
        );

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: mode.temperature(),
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Malformed(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Malformed("response had no choices".to_string()))?;

        debug!("Groq call succeeded ({} chars)", text.len());
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    /// One attempt, no retries. Every failure is logged and collapsed to
    /// `None` so the caller falls straight back to local templates.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        mode: Mode,
        seed: Option<u32>,
    ) -> Option<String> {
        match self.try_generate(system_prompt, user_prompt, mode, seed).await {
            Ok(text) => Some(text),
            Err(LlmError::MissingCredential) => {
                debug!("GROQ_API_KEY not set — skipping remote generation");
                None
            }
            Err(e) => {
                warn!("Groq API error: {e}");
                None
            }
        }
    }
}
