use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::audio::{self, SoundEffect, SoundPlayer};
use crate::chat::{ChatHistory, ResponseDispatcher, ResponseEngine};
use crate::config::AppConfig;
use crate::game::{GameEngine, GameEvent, GameState, GameStatus, PauseState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, required_size};
use crate::speech::SpeechRelay;

/// Keyboard-driven game with the talking snake in the sidebar
pub struct HumanMode {
    config: AppConfig,
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    dispatcher: ResponseDispatcher,
    sounds: Box<dyn SoundPlayer>,
    should_quit: bool,
}

impl HumanMode {
    /// Wire up the game from configuration: response engine, speech and sound
    pub fn new(config: AppConfig) -> Result<Self> {
        let engine = ResponseEngine::new(config.personality, config.chat.clone())
            .context("Failed to create response engine")?;
        let speech = SpeechRelay::from_config(&config.speech);
        let dispatcher = ResponseDispatcher::new(engine, ChatHistory::new(), speech);
        let sounds = audio::default_player(&config.assets_dir, config.sound_effects);

        Ok(Self::with_parts(config, dispatcher, sounds))
    }

    pub fn with_parts(
        config: AppConfig,
        dispatcher: ResponseDispatcher,
        sounds: Box<dyn SoundPlayer>,
    ) -> Self {
        let mut engine = GameEngine::new(config.game.clone());
        let state = engine.reset();

        Self {
            renderer: Renderer::new(config.personality, dispatcher.is_online()),
            config,
            engine,
            state,
            metrics: GameMetrics::new(),
            input_handler: InputHandler::new(),
            dispatcher,
            sounds,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let needed = required_size(self.state.grid_width, self.state.grid_height);
        let size = terminal.size().context("Failed to read terminal size")?;
        if size.width < needed.width || size.height < needed.height {
            warn!(
                have = %format!("{}x{}", size.width, size.height),
                want = %format!("{}x{}", needed.width, needed.height),
                "terminal is smaller than the board, parts will be cut off"
            );
        }

        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.config.tick_interval());
        let mut render_timer = interval(self.config.frame_interval());

        info!("round started");
        self.announce(GameEvent::Start);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let chat = self.dispatcher.history().recent();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &chat, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            games = self.metrics.games_played,
            best = self.metrics.high_score,
            "leaving game"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(dir) => {
                self.state.set_direction(dir);
            }
            KeyAction::TogglePause => {
                if let Some(pause) = self.state.toggle_pause() {
                    match pause {
                        PauseState::Paused => self.metrics.on_pause(),
                        PauseState::Resumed => self.metrics.on_resume(),
                    }
                    self.announce(pause.into());
                }
            }
            KeyAction::Restart => {
                // Only a finished round can be restarted
                if self.state.status() == GameStatus::Crashed {
                    self.reset_game();
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if let Some(event) = self.engine.update(&mut self.state) {
            self.on_game_event(event);
        }
    }

    fn on_game_event(&mut self, event: GameEvent) {
        debug!(%event, score = self.state.score, "game event");

        if let Some(effect) = SoundEffect::for_event(event) {
            self.sounds.play(effect);
        }

        match event {
            GameEvent::Crash => {
                self.metrics.on_game_over(self.state.score);
                info!(
                    score = self.state.score,
                    cause = ?self.state.collision,
                    "round over"
                );
            }
            GameEvent::Milestone => self.metrics.on_milestone(),
            _ => {}
        }

        self.announce(event);
    }

    /// Ask for the snake's reaction without waiting for it
    fn announce(&self, event: GameEvent) {
        // Replies may outlive the round they were asked for; nothing is cancelled
        drop(self.dispatcher.dispatch(event, self.state.score));
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        info!("round started");
        self.announce(GameEvent::Start);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
