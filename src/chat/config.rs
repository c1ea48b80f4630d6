use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sampling settings sent with every remote request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_output_tokens: 40,
            top_p: 0.95,
            top_k: 40,
        }
    }
}

/// Configuration for the response engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key for the text-generation endpoint; `None` means offline
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the generative-language API
    pub api_base: String,
    /// Model used for replies
    pub model: String,
    /// Upper bound on a single request, connect included
    pub timeout_ms: u64,
    /// Replies longer than this many characters are cut short
    pub max_reply_chars: usize,
    pub generation: GenerationConfig,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            timeout_ms: 3000,
            max_reply_chars: 100,
            generation: GenerationConfig::default(),
        }
    }
}

impl ChatConfig {
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            // An empty variable counts as unset
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full URL of the generate call for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}
