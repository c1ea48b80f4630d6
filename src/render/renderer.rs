use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::chat::{Personality, SPEAKER_PREFIX};
use crate::game::{GameState, GameStatus, Position};
use crate::metrics::GameMetrics;

/// Width of the chat panel in columns
const CHAT_PANEL_WIDTH: u16 = 34;
/// Room the header and footer lines need
const MIN_PLAY_WIDTH: u16 = 64;

pub struct Renderer {
    personality: Personality,
    online: bool,
}

impl Renderer {
    /// `online` marks whether replies come from the remote model or the canned table
    pub fn new(personality: Personality, online: bool) -> Self {
        Self {
            personality,
            online,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        chat: &[String],
        metrics: &GameMetrics,
    ) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(CHAT_PANEL_WIDTH)])
            .split(frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(columns[0]);

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = chunks[1];
        if state.status() == GameStatus::Crashed {
            let game_over = self.render_game_over(state);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(state);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);

        let chat_panel = self.render_chat(chat);
        frame.render_widget(chat_panel, columns[1]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid_height);

        for y in 0..state.grid_height {
            let mut spans = Vec::with_capacity(state.grid_width);

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == state.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let (title, border_color) = if state.paused {
            (" PAUSED - press P to resume ", Color::Yellow)
        } else {
            (" Snake ", Color::White)
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("  "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("  "),
            Span::styled("Rounds: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("  "),
            Span::styled("Milestones: ", label),
            Span::styled(metrics.milestones.to_string(), value),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let cause = state
            .collision
            .map(|collision| format!("The snake {}.", collision.describe()))
            .unwrap_or_default();

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_chat(&self, chat: &[String]) -> Paragraph<'_> {
        let text_style = Style::default().fg(Color::Gray);
        let mut lines = Vec::with_capacity(chat.len() * 2);

        if chat.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{SPEAKER_PREFIX}..."),
                text_style,
            )));
        }

        for message in chat {
            let line = match message.strip_prefix(SPEAKER_PREFIX) {
                Some(body) => Line::from(vec![
                    Span::styled(
                        SPEAKER_PREFIX,
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(body.to_string(), text_style),
                ]),
                None => Line::from(Span::styled(message.clone(), text_style)),
            };
            lines.push(line);
            lines.push(Line::from(""));
        }

        let title = if self.online {
            format!(" {} snake ", self.personality.name())
        } else {
            format!(" {} snake (offline) ", self.personality.name())
        };

        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Blue))
                .title(title),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Personality::default(), false)
    }
}

/// Smallest terminal that shows the whole grid next to the chat panel
///
/// Saturates at `u16::MAX` for boards no terminal can hold.
pub fn required_size(grid_width: usize, grid_height: usize) -> Rect {
    let board_width = grid_width.saturating_mul(2).saturating_add(2);
    let board_height = grid_height.saturating_add(2);

    let width = u16::try_from(board_width)
        .unwrap_or(u16::MAX)
        .max(MIN_PLAY_WIDTH)
        .saturating_add(CHAT_PANEL_WIDTH);
    let height = u16::try_from(board_height)
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    Rect::new(0, 0, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Direction, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn sample_state() -> GameState {
        GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(8, 2),
            10,
            10,
        )
    }

    fn draw(state: &GameState, chat: &[String]) -> String {
        draw_with(
            &Renderer::new(Personality::Friendly, true),
            state,
            chat,
            &GameMetrics::new(),
        )
    }

    fn draw_with(
        renderer: &Renderer,
        state: &GameState,
        chat: &[String],
        metrics: &GameMetrics,
    ) -> String {
        let area = required_size(state.grid_width, state.grid_height);
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();

        terminal
            .draw(|frame| renderer.render(frame, state, chat, metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_running_screen() {
        let screen = draw(&sample_state(), &[]);

        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("friendly snake"));
        assert!(!screen.contains("(offline)"));
        assert!(screen.contains("Snake: ..."));
        assert!(screen.contains("■"));
        assert!(screen.contains("●"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_header_shows_session_counts() {
        let mut metrics = GameMetrics::new();
        metrics.on_milestone();
        metrics.on_milestone();
        metrics.on_game_over(7);

        let renderer = Renderer::new(Personality::Friendly, true);
        let screen = draw_with(&renderer, &sample_state(), &[], &metrics);

        assert!(screen.contains("Best: 7"));
        assert!(screen.contains("Rounds: 1"));
        assert!(screen.contains("Milestones: 2"));
    }

    #[test]
    fn test_offline_marker() {
        let renderer = Renderer::new(Personality::Sarcastic, false);
        let screen = draw_with(&renderer, &sample_state(), &[], &GameMetrics::new());
        assert!(screen.contains("sarcastic snake (offline)"));
    }

    #[test]
    fn test_required_size_saturates() {
        let area = required_size(usize::MAX / 2, usize::MAX);
        assert_eq!(area.width, u16::MAX);
        assert_eq!(area.height, u16::MAX);

        let area = required_size(10, 10);
        assert_eq!(area.width, MIN_PLAY_WIDTH + CHAT_PANEL_WIDTH);
        assert_eq!(area.height, 18);
    }

    #[test]
    fn test_chat_lines_shown() {
        let chat = vec![
            "Snake: Ready to play? Let's have fun!".to_string(),
            "Snake: Yummy! Great catch!".to_string(),
        ];
        let screen = draw(&sample_state(), &chat);

        assert!(screen.contains("Yummy! Great catch!"));
        assert!(screen.contains("Ready to play?"));
        assert!(!screen.contains("Snake: ..."));
    }

    #[test]
    fn test_paused_banner() {
        let mut state = sample_state();
        state.toggle_pause();
        assert!(draw(&state, &[]).contains("PAUSED"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = sample_state();
        state.score = 7;
        state.collision = Some(CollisionType::Wall);

        let screen = draw(&state, &[]);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Final Score: 7"));
        assert!(screen.contains("hit the wall"));
    }
}
