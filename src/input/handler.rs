use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Steer the snake
    Steer(Direction),
    /// Start a new round, or restart the current one
    Start,
    /// Leave the game
    Quit,
    /// Unrecognized input, silently ignored
    Ignored,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Command {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Command::Steer(Direction::Up),
            KeyCode::Down => Command::Steer(Direction::Down),
            KeyCode::Left => Command::Steer(Direction::Left),
            KeyCode::Right => Command::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Command::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Command::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Command::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Command::Steer(Direction::Right),

            // Controls
            KeyCode::Enter | KeyCode::Char(' ') => Command::Start,
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Start,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,

            _ => Command::Ignored,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
