//! Keyboard stand-in for the hardware button.
//!
//! Space, Up and Enter act as the button. Terminals only report key-up events
//! when keyboard enhancement is available; without it a press counts as held
//! for [`HOLD_WINDOW`] after the latest press or auto-repeat event.
//!
//! Esc, `q` and Ctrl-C request a quit, which is how the host "power cycles".

use super::InputSource;
use crate::error::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use std::io;
use std::time::{Duration, Instant};

/// How long a press stays down without a release event to end it.
pub const HOLD_WINDOW: Duration = Duration::from_millis(40);

#[derive(Debug, Default)]
pub struct KeyboardInput {
    enhanced: bool,
    held: bool,
    last_press: Option<Instant>,
    quit_requested: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Blocks until a quit key arrives.
    pub fn wait_for_quit(&mut self) -> Result<()> {
        while !self.quit_requested {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.held = true;
                    self.last_press = Some(now);
                }
                KeyEventKind::Release => {
                    self.held = false;
                    self.last_press = None;
                }
            },
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit_requested = true;
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                if key.kind != KeyEventKind::Release {
                    self.quit_requested = true;
                }
            }
            _ => {}
        }
    }

    fn level(&self, now: Instant) -> bool {
        if self.enhanced {
            return self.held;
        }
        self.last_press
            .is_some_and(|pressed| now.saturating_duration_since(pressed) <= HOLD_WINDOW)
    }
}

impl InputSource for KeyboardInput {
    fn configure(&mut self) -> Result<()> {
        // Not every terminal answers the capability query; treat that as "no".
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced = true;
        }
        log::debug!("keyboard enhancement: {}", self.enhanced);
        Ok(())
    }

    fn is_pressed(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(self.level(Instant::now()))
    }
}

impl Drop for KeyboardInput {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_holds_for_window() {
        let mut input = KeyboardInput::new();
        let t0 = Instant::now();
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press), t0);
        assert!(input.level(t0));
        assert!(input.level(t0 + HOLD_WINDOW));
        assert!(!input.level(t0 + HOLD_WINDOW + Duration::from_millis(1)));
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut input = KeyboardInput::new();
        let t0 = Instant::now();
        input.handle_key(key(KeyCode::Up, KeyEventKind::Press), t0);
        let t1 = t0 + Duration::from_millis(30);
        input.handle_key(key(KeyCode::Up, KeyEventKind::Repeat), t1);
        assert!(input.level(t1 + HOLD_WINDOW));
    }

    #[test]
    fn test_enhanced_mode_follows_release() {
        let mut input = KeyboardInput {
            enhanced: true,
            ..KeyboardInput::default()
        };
        let t0 = Instant::now();
        input.handle_key(key(KeyCode::Enter, KeyEventKind::Press), t0);
        assert!(input.level(t0 + Duration::from_secs(5)));
        input.handle_key(key(KeyCode::Enter, KeyEventKind::Release), t0);
        assert!(!input.level(t0));
    }

    #[test]
    fn test_quit_keys() {
        let mut input = KeyboardInput::new();
        input.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press), Instant::now());
        assert!(!input.quit_requested());
        input.handle_key(key(KeyCode::Esc, KeyEventKind::Press), Instant::now());
        assert!(input.quit_requested());

        let mut input = KeyboardInput::new();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'), KeyEventKind::Press)
        };
        input.handle_key(ctrl_c, Instant::now());
        assert!(input.quit_requested());
    }

    #[test]
    fn test_never_pressed_is_released() {
        let input = KeyboardInput::new();
        assert!(!input.level(Instant::now()));
    }
}
