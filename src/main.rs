use anyhow::{Context, Result, anyhow};
use chat_snake::AppConfig;
use chat_snake::chat::{ChatConfig, Personality};
use chat_snake::game::GameConfig;
use chat_snake::modes::HumanMode;
use chat_snake::speech::SpeechConfig;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chat_snake")]
#[command(version, about = "Snake with a talking snake in the sidebar")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "30")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// How the snake talks
    #[arg(long, value_enum, default_value_t = Personality::Sarcastic)]
    personality: Personality,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Key for the remote text-generation API; canned lines are used without one
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model asked for replies
    #[arg(long, default_value = "gemini-2.0-flash-exp")]
    model: String,

    /// Do not read replies aloud
    #[arg(long)]
    no_tts: bool,

    /// Speech program to use instead of searching PATH
    #[arg(long)]
    tts_program: Option<PathBuf>,

    /// Speech rate in words per minute
    #[arg(long, default_value = "180")]
    speech_rate: u32,

    /// Speech volume between 0 and 1
    #[arg(long, default_value = "0.9")]
    speech_volume: f32,

    /// Turn off sound effects
    #[arg(long)]
    no_sound: bool,

    /// Directory holding eating/break sound files
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        AppConfig {
            game: GameConfig::new(self.width, self.height),
            chat: ChatConfig {
                model: self.model,
                ..ChatConfig::with_api_key(self.api_key)
            },
            speech: SpeechConfig {
                enabled: !self.no_tts,
                rate: self.speech_rate,
                volume: self.speech_volume,
                program: self.tts_program,
            },
            personality: self.personality,
            tick_ms: self.tick_ms,
            sound_effects: !self.no_sound,
            assets_dir: self.assets_dir,
            ..Default::default()
        }
    }
}

/// Logs go to a file because the terminal belongs to the game
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chat_snake=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.into_config();
    config.validate().map_err(|err| anyhow!(err))?;

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
