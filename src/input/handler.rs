use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    TogglePause,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),

            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                // Movement - WASD
                'w' => KeyAction::Move(Direction::Up),
                's' => KeyAction::Move(Direction::Down),
                'a' => KeyAction::Move(Direction::Left),
                'd' => KeyAction::Move(Direction::Right),

                'p' => KeyAction::TogglePause,
                'r' => KeyAction::Restart,
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },

            KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, code: KeyCode) -> KeyAction {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Up), KeyAction::Move(Direction::Up));
        assert_eq!(press(&handler, KeyCode::Down), KeyAction::Move(Direction::Down));
        assert_eq!(press(&handler, KeyCode::Left), KeyAction::Move(Direction::Left));
        assert_eq!(
            press(&handler, KeyCode::Right),
            KeyAction::Move(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('w')), KeyAction::Move(Direction::Up));
        assert_eq!(press(&handler, KeyCode::Char('a')), KeyAction::Move(Direction::Left));
        assert_eq!(press(&handler, KeyCode::Char('s')), KeyAction::Move(Direction::Down));
        assert_eq!(
            press(&handler, KeyCode::Char('d')),
            KeyAction::Move(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Move(Direction::Up)
        );
    }

    #[test]
    fn test_pause_key() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('p')), KeyAction::TogglePause);
        assert_eq!(press(&handler, KeyCode::Char('P')), KeyAction::TogglePause);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(&handler, KeyCode::Char('Q')), KeyAction::Quit);
        assert_eq!(press(&handler, KeyCode::Esc), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('r')), KeyAction::Restart);
        assert_eq!(press(&handler, KeyCode::Char('R')), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(&handler, KeyCode::Tab), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
