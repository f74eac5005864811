//! Key mapping from terminal events to direction presses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_ravine_core::InputPort;
use tui_ravine_types::Buttons;

/// The four direction lines the game samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Map a key code to a direction press.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Accumulates direction presses between ticks.
///
/// Terminals deliver discrete press events rather than held-line state, so
/// the runner feeds every press seen since the last tick in here and the
/// game's once-per-tick `sample()` drains the result.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    pending: Buttons,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press if it maps to a direction.
    pub fn press(&mut self, code: KeyCode) {
        match map_key(code) {
            Some(Direction::Left) => self.pending.left = true,
            Some(Direction::Right) => self.pending.right = true,
            Some(Direction::Up) => self.pending.up = true,
            Some(Direction::Down) => self.pending.down = true,
            None => {}
        }
    }
}

impl InputPort for KeyboardInput {
    fn sample(&mut self) -> Buttons {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_map_to_directions() {
        assert_eq!(map_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::Right), Some(Direction::Right));
        assert_eq!(map_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::Down), Some(Direction::Down));

        assert_eq!(map_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::Char('L')), Some(Direction::Right));
        assert_eq!(map_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::Char('J')), Some(Direction::Down));

        assert_eq!(map_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn sample_drains_accumulated_presses() {
        let mut kb = KeyboardInput::new();
        kb.press(KeyCode::Left);
        kb.press(KeyCode::Char('p'));

        let buttons = kb.sample();
        assert!(buttons.left);
        assert!(!buttons.right && !buttons.up && !buttons.down);

        // Drained: the next tick starts clean.
        assert_eq!(kb.sample(), Buttons::NONE);
    }
}
