//! Prompt color semantics.
//!
//! A [`Theme`] is a plain value carried inside each prompt's config, so two
//! prompts (or two test runs) never share styling state.
//!
//! Color semantics:
//! - Blue: the question being asked
//! - Light blue: an accepted answer
//! - Pink: the focused option and the selection marker
//! - Red: validation errors
//! - Gray: unfocused options, placeholders, hints

use ratatui::style::{Color, Modifier, Style};

/// Question text.
pub const STYLE_QUESTION: Style = Style::new().fg(Color::Indexed(69));

/// Accepted answer in the summary line.
pub const STYLE_ANSWER: Style = Style::new().fg(Color::Indexed(39));

/// Selection marker (`>`).
pub const STYLE_SELECTION: Style = Style::new().fg(Color::Indexed(212));

/// Validation error line.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Indexed(196));

/// Option under the cursor.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Indexed(212));

/// Every other visible option.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::Indexed(241));

/// Text cursor cell inside an input line.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style set consulted by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub question: Style,
    pub answer: Style,
    pub selection: Style,
    pub error: Style,
    pub focused: Style,
    pub unfocused: Style,
    pub cursor: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            question: STYLE_QUESTION,
            answer: STYLE_ANSWER,
            selection: STYLE_SELECTION,
            error: STYLE_ERROR,
            focused: STYLE_FOCUSED,
            unfocused: STYLE_UNFOCUSED,
            cursor: STYLE_CURSOR,
        }
    }
}

impl Theme {
    /// No colors at all. The cursor stays reversed so it remains visible.
    pub fn plain() -> Self {
        Theme {
            question: Style::new(),
            answer: Style::new(),
            selection: Style::new(),
            error: Style::new(),
            focused: Style::new(),
            unfocused: Style::new(),
            cursor: STYLE_CURSOR,
        }
    }
}
