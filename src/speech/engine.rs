use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Something that can read text aloud, one sentence at a time.
///
/// `speak` blocks until playback has finished.
pub trait SpeechEngine: Send + 'static {
    fn speak(&mut self, text: &str) -> Result<()>;
}

/// Settings for spoken replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Words per minute
    pub rate: u32,
    /// 0.0 to 1.0
    pub volume: f32,
    /// Program to use instead of searching `PATH`
    pub program: Option<PathBuf>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 180,
            volume: 0.9,
            program: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Espeak,
    Say,
}

const KNOWN_PROGRAMS: [(&str, Flavor); 3] = [
    ("espeak-ng", Flavor::Espeak),
    ("espeak", Flavor::Espeak),
    ("say", Flavor::Say),
];

/// Speech through an installed command-line synthesizer
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: PathBuf,
    flavor: Flavor,
    rate: u32,
    volume: f32,
}

impl CommandSpeech {
    /// Pick the configured program, or the first known one found on `PATH`
    pub fn detect(config: &SpeechConfig) -> Option<Self> {
        let (program, flavor) = match &config.program {
            Some(program) => (program.clone(), flavor_of(program)),
            None => KNOWN_PROGRAMS
                .iter()
                .find_map(|(name, flavor)| find_in_path(name).map(|path| (path, *flavor)))?,
        };

        Some(Self {
            program,
            flavor,
            rate: config.rate,
            volume: config.volume.clamp(0.0, 1.0),
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn args(&self, text: &str) -> Vec<String> {
        match self.flavor {
            // espeak amplitude runs 0..=200
            Flavor::Espeak => vec![
                "-s".to_string(),
                self.rate.to_string(),
                "-a".to_string(),
                ((self.volume * 200.0).round() as u32).to_string(),
                "--".to_string(),
                text.to_string(),
            ],
            Flavor::Say => vec![
                "-r".to_string(),
                self.rate.to_string(),
                "--".to_string(),
                text.to_string(),
            ],
        }
    }
}

impl SpeechEngine for CommandSpeech {
    fn speak(&mut self, text: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !status.success() {
            bail!("{} exited with {}", self.program.display(), status);
        }
        Ok(())
    }
}

fn flavor_of(program: &Path) -> Flavor {
    match program.file_stem().and_then(|stem| stem.to_str()) {
        Some("say") => Flavor::Say,
        _ => Flavor::Espeak,
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
