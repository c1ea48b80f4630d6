//! The talking snake
//!
//! Provides:
//! - Personalities with their prompts and canned lines
//! - A response engine that asks a remote model and falls back to canned text
//! - A shared, bounded chat history
//! - A dispatcher that fetches replies off the game loop

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod history;
pub mod personality;

pub use config::{ChatConfig, GenerationConfig};
pub use dispatch::{ResponseDispatcher, SPEAKER_PREFIX};
pub use engine::{ResponseEngine, build_prompt, truncate_reply};
pub use error::ChatError;
pub use history::{ChatHistory, DISPLAY_LINES, HISTORY_CAPACITY};
pub use personality::{Personality, canned_response};
