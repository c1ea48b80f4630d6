use anyhow::{Context, Result};
use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::{SoundEffect, SoundPlayer};

/// Sound effects through the default output device.
///
/// Uses `eating` / `break` sound files from the assets directory (mp3 first,
/// then wav) and a short synthesized tone for anything missing.
pub struct RodioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: HashMap<SoundEffect, Vec<u8>>,
}

impl RodioPlayer {
    pub fn new(assets_dir: &Path) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("Failed to open audio output")?;

        let mut clips = HashMap::new();
        for effect in [SoundEffect::Eat, SoundEffect::Crash] {
            if let Some(bytes) = load_clip(assets_dir, effect) {
                clips.insert(effect, bytes);
            }
        }

        Ok(Self {
            _stream: stream,
            handle,
            clips,
        })
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, effect: SoundEffect) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };

        match self.clips.get(&effect) {
            Some(bytes) => match Decoder::new(Cursor::new(bytes.clone())) {
                Ok(source) => sink.append(source),
                Err(err) => {
                    debug!(?effect, error = %err, "could not decode clip");
                    return;
                }
            },
            None => sink.append(tone(effect)),
        }
        sink.detach();
    }
}

fn load_clip(assets_dir: &Path, effect: SoundEffect) -> Option<Vec<u8>> {
    ["mp3", "wav"].iter().find_map(|ext| {
        let path = assets_dir.join(format!("{}.{ext}", effect.file_stem()));
        std::fs::read(&path).ok()
    })
}

fn tone(effect: SoundEffect) -> impl Source<Item = f32> + Send + 'static {
    let (freq, millis) = match effect {
        SoundEffect::Eat => (660.0, 80),
        SoundEffect::Crash => (110.0, 300),
    };
    SineWave::new(freq)
        .take_duration(Duration::from_millis(millis))
        .amplify(0.15)
}
