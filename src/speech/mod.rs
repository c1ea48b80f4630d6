//! Spoken replies
//!
//! Lines are queued on a [`SpeechRelay`] and read out by a single worker
//! thread, one after another.

pub mod engine;
pub mod relay;

pub use engine::{CommandSpeech, SpeechConfig, SpeechEngine};
pub use relay::SpeechRelay;
