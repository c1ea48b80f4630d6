use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{engine::ResponseEngine, history::ChatHistory};
use crate::game::GameEvent;
use crate::speech::SpeechRelay;

/// Prefix shown in front of every snake line in the chat panel
pub const SPEAKER_PREFIX: &str = "Snake: ";

/// Fetches replies in the background and posts them to the chat.
///
/// Each event gets its own task. Replies are appended whenever they arrive,
/// so two overlapping requests may land in either order, and a request made
/// before a reset still posts its reply afterwards. Nothing is cancelled.
#[derive(Debug, Clone)]
pub struct ResponseDispatcher {
    engine: Arc<ResponseEngine>,
    history: ChatHistory,
    speech: SpeechRelay,
}

impl ResponseDispatcher {
    pub fn new(engine: ResponseEngine, history: ChatHistory, speech: SpeechRelay) -> Self {
        Self {
            engine: Arc::new(engine),
            history,
            speech,
        }
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn is_online(&self) -> bool {
        self.engine.is_online()
    }

    /// Start fetching the reaction to `event`. Must be called inside a tokio runtime.
    ///
    /// The returned handle may be dropped; the task keeps running.
    pub fn dispatch(&self, event: GameEvent, score: u32) -> JoinHandle<()> {
        let engine = Arc::clone(&self.engine);
        let history = self.history.clone();
        let speech = self.speech.clone();

        tokio::spawn(async move {
            let line = engine.get_response(event, score).await;
            debug!(%event, score, %line, "snake replied");
            history.push(format!("{SPEAKER_PREFIX}{line}"));
            speech.enqueue(line);
        })
    }
}
