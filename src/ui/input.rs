//! Keyboard input handling with vim-style navigation support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Standard navigation mode
    #[default]
    Normal,
    /// Text editing mode
    Insert,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,

    // Selection
    Select,
    Back,

    // Project operations
    InstallDependencies,
    NewComponent,
    StartDevServer,
    EnsureLayout,

    // Misc
    Help,
    Quit,
}

/// Keyboard bindings configuration
pub struct KeyBindings {
    pub vim_navigation: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            vim_navigation: true,
        }
    }
}

/// Input handler for processing keyboard events
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new(vim_navigation: bool) -> Self {
        Self {
            bindings: KeyBindings { vim_navigation },
        }
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> Option<Action> {
        match mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Insert => self.handle_insert_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation - arrow keys always work
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Home => Some(Action::Home),
            KeyCode::End => Some(Action::End),

            // Vim-style navigation (j/k)
            KeyCode::Char('j') if self.bindings.vim_navigation => Some(Action::MoveDown),
            KeyCode::Char('k') if self.bindings.vim_navigation => Some(Action::MoveUp),
            KeyCode::Char('g') if self.bindings.vim_navigation => Some(Action::Home),
            KeyCode::Char('G') if self.bindings.vim_navigation => Some(Action::End),

            // Selection
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Char(' ') => Some(Action::Select),

            // Back/Quit
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),

            // Actions
            KeyCode::Char('i') => Some(Action::InstallDependencies),
            KeyCode::Char('n') => Some(Action::NewComponent),
            KeyCode::Char('d') => Some(Action::StartDevServer),
            KeyCode::Char('s') => Some(Action::EnsureLayout),

            // Misc
            KeyCode::Char('?') => Some(Action::Help),

            _ => None,
        }
    }

    /// Handle key in insert mode
    fn handle_insert_key(&self, key: KeyEvent) -> Option<Action> {
        // In insert mode, Esc returns to normal mode
        if key.code == KeyCode::Esc {
            return Some(Action::Back);
        }

        // Ctrl+C also cancels
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Back);
        }

        // Other keys are handled by the text input widget
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_navigation() {
        let handler = InputHandler::new(true);

        let key_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_j, InputMode::Normal),
            Some(Action::MoveDown)
        );

        let key_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_k, InputMode::Normal),
            Some(Action::MoveUp)
        );
    }

    #[test]
    fn test_vim_navigation_disabled() {
        let handler = InputHandler::new(false);

        let key_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_j, InputMode::Normal), None);

        let key_up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_up, InputMode::Normal),
            Some(Action::MoveUp)
        );
    }

    #[test]
    fn test_action_keys() {
        let handler = InputHandler::new(true);

        let key_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_n, InputMode::Normal),
            Some(Action::NewComponent)
        );

        let key_i = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_i, InputMode::Normal),
            Some(Action::InstallDependencies)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new(true);

        let key_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_q, InputMode::Normal),
            Some(Action::Quit)
        );

        let key_esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_esc, InputMode::Normal),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_insert_mode_passes_characters_through() {
        let handler = InputHandler::new(true);

        let key_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_a, InputMode::Insert), None);

        let key_esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_esc, InputMode::Insert),
            Some(Action::Back)
        );
    }
}
