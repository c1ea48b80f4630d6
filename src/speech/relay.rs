use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, info, warn};

use super::engine::{CommandSpeech, SpeechConfig, SpeechEngine};

/// Queue in front of a speech engine.
///
/// A single worker thread owns the engine and speaks queued lines one at a
/// time, so playback never overlaps. Handles are cheap to clone and every
/// clone feeds the same worker; the worker stops once all handles are gone.
#[derive(Debug, Clone)]
pub struct SpeechRelay {
    sender: Option<Sender<String>>,
}

impl SpeechRelay {
    /// Start the worker thread for `engine`
    pub fn spawn<E: SpeechEngine>(engine: E) -> Self {
        let (sender, receiver) = mpsc::channel();

        match thread::Builder::new()
            .name("speech-relay".to_string())
            .spawn(move || run_worker(engine, receiver))
        {
            Ok(_) => Self {
                sender: Some(sender),
            },
            Err(err) => {
                warn!(error = %err, "could not start speech worker, speech disabled");
                Self::disabled()
            }
        }
    }

    /// A relay that silently drops everything
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    /// Relay backed by a command-line synthesizer, if one is available
    pub fn from_config(config: &SpeechConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        match CommandSpeech::detect(config) {
            Some(engine) => {
                info!(program = %engine.program().display(), "speech enabled");
                Self::spawn(engine)
            }
            None => {
                info!("no speech synthesizer found, continuing without speech");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Queue `text` for playback without waiting.
    ///
    /// Returns `false` when the text was dropped because speech is unavailable.
    pub fn enqueue(&self, text: impl Into<String>) -> bool {
        match &self.sender {
            Some(sender) => sender.send(text.into()).is_ok(),
            None => false,
        }
    }
}

fn run_worker<E: SpeechEngine>(mut engine: E, receiver: Receiver<String>) {
    for text in receiver {
        if text.trim().is_empty() {
            continue;
        }

        match panic::catch_unwind(AssertUnwindSafe(|| engine.speak(&text))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(error = %err, "speech playback failed"),
            Err(_) => warn!("speech engine panicked during playback"),
        }
    }
    debug!("speech worker stopped");
}
