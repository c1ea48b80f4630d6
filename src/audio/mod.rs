//! One-shot sound effects
//!
//! Playback is cosmetic: players swallow their own errors.

#[cfg(feature = "audio")]
mod rodio_player;

#[cfg(feature = "audio")]
pub use rodio_player::RodioPlayer;

use std::path::Path;

use crate::game::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Eat,
    Crash,
}

impl SoundEffect {
    /// Effect that goes with a game event, if any
    pub fn for_event(event: GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::Eat | GameEvent::Milestone => Some(SoundEffect::Eat),
            GameEvent::Crash => Some(SoundEffect::Crash),
            GameEvent::Start | GameEvent::Pause | GameEvent::Resume => None,
        }
    }

    /// Base file name looked up in the assets directory
    pub fn file_stem(&self) -> &'static str {
        match self {
            SoundEffect::Eat => "eating",
            SoundEffect::Crash => "break",
        }
    }
}

/// Fire-and-forget sound playback
pub trait SoundPlayer {
    fn play(&self, effect: SoundEffect);
}

/// Plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _effect: SoundEffect) {}
}

/// Best available player for this build
pub fn default_player(assets_dir: &Path, enabled: bool) -> Box<dyn SoundPlayer> {
    if !enabled {
        return Box::new(SilentPlayer);
    }

    #[cfg(feature = "audio")]
    {
        match RodioPlayer::new(assets_dir) {
            Ok(player) => return Box::new(player),
            Err(err) => tracing::warn!(error = %err, "sound effects unavailable"),
        }
    }

    #[cfg(not(feature = "audio"))]
    {
        tracing::info!(
            assets = %assets_dir.display(),
            "built without the audio feature, sound effects off"
        );
    }

    Box::new(SilentPlayer)
}
