use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    config::{ChatConfig, GenerationConfig},
    error::ChatError,
    personality::Personality,
};
use crate::game::GameEvent;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

/// Produces the snake's one-liners, remotely when possible
#[derive(Debug, Clone)]
pub struct ResponseEngine {
    personality: Personality,
    config: ChatConfig,
    client: reqwest::Client,
}

impl ResponseEngine {
    pub fn new(personality: Personality, config: ChatConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        if config.api_key.is_some() {
            info!(
                model = %config.model,
                personality = personality.name(),
                "remote replies enabled"
            );
        } else {
            warn!("no API key set, the snake will use canned responses");
        }

        Ok(Self {
            personality,
            config,
            client,
        })
    }

    /// Whether replies are requested remotely at all
    pub fn is_online(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// The snake's reaction to `event`.
    ///
    /// Never fails: without a key, or when the remote call goes wrong in any
    /// way, the canned line for this personality is returned instead.
    pub async fn get_response(&self, event: GameEvent, score: u32) -> String {
        let text = match self.fetch_remote(event, score).await {
            Ok(text) => text,
            Err(ChatError::MissingApiKey) => self.personality.canned(event, score),
            Err(err) => {
                warn!(%event, error = %err, "remote reply failed, using canned line");
                self.personality.canned(event, score)
            }
        };

        truncate_reply(&text, self.config.max_reply_chars)
    }

    async fn fetch_remote(&self, event: GameEvent, score: u32) -> Result<String, ChatError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(self.personality, event, score),
                }],
            }],
            generation_config: &self.config.generation,
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status));
        }

        let payload: GenerateResponse = response.json().await?;
        let text = extract_text(payload)?;
        debug!(%event, reply = %text, "remote reply");
        Ok(text)
    }
}

/// Prompt sent to the model for one event
pub fn build_prompt(personality: Personality, event: GameEvent, score: u32) -> String {
    format!(
        "{}\nEvent: {}\nScore: {}\nRespond in 1 short witty sentence (max 15 words).",
        personality.prompt_preamble(),
        event,
        score
    )
}

fn extract_text(payload: GenerateResponse) -> Result<String, ChatError> {
    payload
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(ChatError::EmptyReply)
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "..."
pub fn truncate_reply(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
