use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::chat::{ChatConfig, Personality};
use crate::game::GameConfig;
use crate::speech::SpeechConfig;

/// Everything the game needs, gathered once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub game: GameConfig,
    pub chat: ChatConfig,
    pub speech: SpeechConfig,
    pub personality: Personality,
    /// Time between game ticks
    pub tick_ms: u64,
    /// Time between redraws
    pub frame_ms: u64,
    pub sound_effects: bool,
    /// Where `eating` and `break` sound files are looked up
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            chat: ChatConfig::default(),
            speech: SpeechConfig::default(),
            personality: Personality::default(),
            tick_ms: 100,
            frame_ms: 33,
            sound_effects: true,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl AppConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    pub fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.tick_ms == 0 {
            return Err("tick interval must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.speech.volume) {
            return Err(format!(
                "speech volume must be between 0 and 1, got {}",
                self.speech.volume
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_rejects_bad_volume() {
        let mut config = AppConfig::default();
        config.speech.volume = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = AppConfig::default();
        config.chat.api_key = Some("secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
