//! Terminal session: the effects boundary.
//!
//! A [`Session`] hands out one input event at a time and takes one full
//! frame per render cycle. It is the only place with side effects; the
//! prompt state machines never see the terminal directly.
//!
//! - [`TerminalSession`]: crossterm raw mode + a ratatui inline viewport
//! - [`ScriptedSession`]: canned events, frames recorded as plain text

use std::collections::VecDeque;
use std::io;
use std::sync::Once;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::error::PromptError;
use crate::prompt::state::InputEvent;
use crate::prompt::view::plain;

/// Source of input events and sink for rendered frames.
///
/// Owned exclusively by one running prompt at a time.
pub trait Session {
    /// Block until the next meaningful input event.
    fn next_event(&mut self) -> Result<InputEvent, PromptError>;

    /// Replace whatever is on screen with `frame`.
    fn draw(&mut self, frame: &Text<'_>) -> Result<(), PromptError>;
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to an input event.
///
/// Returns None for keys no prompt reacts to.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Interrupt),
            KeyCode::Char('u') => Some(InputEvent::ClearToStart),
            KeyCode::Char('k') => Some(InputEvent::ClearToEnd),
            KeyCode::Char('w') => Some(InputEvent::DeleteWord),
            KeyCode::Char('a') => Some(InputEvent::Home),
            KeyCode::Char('e') => Some(InputEvent::End),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Left => Some(InputEvent::Left),
        KeyCode::Right => Some(InputEvent::Right),
        KeyCode::Home => Some(InputEvent::Home),
        KeyCode::End => Some(InputEvent::End),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Delete => Some(InputEvent::Delete),
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        _ => None,
    }
}

// ============================================================================
// TERMINAL SESSION
// ============================================================================

/// Live terminal: raw mode plus an inline viewport of fixed height.
///
/// Drawing never takes over the whole screen; the prompt occupies
/// `height` rows below the cursor and stays in the scrollback afterwards.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    restored: bool,
}

impl TerminalSession {
    /// Enter raw mode and reserve `height` rows for the prompt.
    pub fn start(height: u16) -> Result<Self, PromptError> {
        install_panic_hook();
        enable_raw_mode()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height.max(1)),
            },
        );
        match terminal {
            Ok(terminal) => Ok(TerminalSession {
                terminal,
                restored: false,
            }),
            Err(err) => {
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }

    /// Leave raw mode and move below the prompt.
    pub fn finish(mut self) -> Result<(), PromptError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), PromptError> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        self.terminal.show_cursor()?;
        println!();
        Ok(())
    }
}

impl Session for TerminalSession {
    fn next_event(&mut self) -> Result<InputEvent, PromptError> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    return Ok(input);
                }
            }
            // mouse, resize, unmapped keys: keep waiting
        }
    }

    fn draw(&mut self, frame: &Text<'_>) -> Result<(), PromptError> {
        self.terminal.draw(|f| {
            f.render_widget(Paragraph::new(frame.clone()), f.area());
        })?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Best-effort restoration if finish() was skipped by an early return
        let _ = self.restore();
    }
}

/// Install (once per process) a panic hook that leaves raw mode before
/// printing the panic.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            original_hook(panic_info);
        }));
    });
}

// ============================================================================
// SCRIPTED SESSION
// ============================================================================

/// Replays a fixed list of events and records every frame as plain text.
///
/// Running out of events is reported as a session error, so a test with
/// too few keystrokes fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedSession {
    events: VecDeque<InputEvent>,
    frames: Vec<String>,
}

impl ScriptedSession {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        ScriptedSession {
            events: events.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    /// Events for typing `text` character by character.
    pub fn typing(text: &str) -> impl Iterator<Item = InputEvent> + '_ {
        text.chars().map(InputEvent::Char)
    }

    /// Every frame drawn so far, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Session for ScriptedSession {
    fn next_event(&mut self) -> Result<InputEvent, PromptError> {
        self.events.pop_front().ok_or_else(|| {
            PromptError::Session(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            ))
        })
    }

    fn draw(&mut self, frame: &Text<'_>) -> Result<(), PromptError> {
        self.frames.push(plain(frame));
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_interrupt() {
        let k = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(k), Some(InputEvent::Interrupt));
    }

    #[test]
    fn plain_c_is_a_character() {
        assert_eq!(map_key(key(KeyCode::Char('c'))), Some(InputEvent::Char('c')));
    }

    #[test]
    fn shifted_letters_stay_characters() {
        let k = KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT);
        assert_eq!(map_key(k), Some(InputEvent::Char('Y')));
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert_eq!(map_key(key(KeyCode::Up)), Some(InputEvent::Up));
        assert_eq!(map_key(key(KeyCode::Down)), Some(InputEvent::Down));
        assert_eq!(map_key(key(KeyCode::Left)), Some(InputEvent::Left));
        assert_eq!(map_key(key(KeyCode::Right)), Some(InputEvent::Right));
    }

    #[test]
    fn editing_chords() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl('u')), Some(InputEvent::ClearToStart));
        assert_eq!(map_key(ctrl('k')), Some(InputEvent::ClearToEnd));
        assert_eq!(map_key(ctrl('w')), Some(InputEvent::DeleteWord));
        assert_eq!(map_key(ctrl('a')), Some(InputEvent::Home));
        assert_eq!(map_key(ctrl('e')), Some(InputEvent::End));
        assert_eq!(map_key(ctrl('z')), None);
    }

    #[test]
    fn enter_and_deletion() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(InputEvent::Enter));
        assert_eq!(map_key(key(KeyCode::Backspace)), Some(InputEvent::Backspace));
        assert_eq!(map_key(key(KeyCode::Delete)), Some(InputEvent::Delete));
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::F(5))), None);
        assert_eq!(map_key(key(KeyCode::Esc)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut k = key(KeyCode::Enter);
        k.kind = KeyEventKind::Release;
        assert_eq!(map_key(k), None);
    }

    #[test]
    fn scripted_session_replays_then_fails() {
        let mut session = ScriptedSession::new([InputEvent::Enter]);
        assert_eq!(session.next_event().unwrap(), InputEvent::Enter);
        assert!(matches!(session.next_event(), Err(PromptError::Session(_))));
    }

    #[test]
    fn scripted_session_records_frames() {
        let mut session = ScriptedSession::default();
        session.draw(&Text::from("one")).unwrap();
        session.draw(&Text::from("two\nlines")).unwrap();
        assert_eq!(session.frames(), ["one", "two\nlines"]);
        assert_eq!(session.last_frame(), Some("two\nlines"));
    }

    #[test]
    fn typing_helper_yields_chars() {
        let events: Vec<_> = ScriptedSession::typing("ab").collect();
        assert_eq!(events, vec![InputEvent::Char('a'), InputEvent::Char('b')]);
    }
}
