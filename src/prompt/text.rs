//! Free-text prompt.

use ratatui::text::Text;
use tracing::debug;

use crate::config::{PromptConfig, Validator};
use crate::error::{PromptError, ValidationError};
use crate::session::Session;
use crate::theme::Theme;

use super::runner::{drive, Machine};
use super::state::{InputEvent, TextEditState, Transition};
use super::update::update_text;
use super::view::{render_summary, render_text};
use super::Prompt;

/// Question, error line, input line.
pub(crate) const TEXT_FRAME_HEIGHT: u16 = 3;

/// Single-line text input with optional validation.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    config: PromptConfig,
    placeholder: Option<String>,
    char_limit: Option<usize>,
}

impl TextPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self::from_config(PromptConfig::new(question))
    }

    pub fn from_config(config: PromptConfig) -> Self {
        TextPrompt {
            config,
            placeholder: None,
            char_limit: None,
        }
    }

    /// Pre-fill the buffer. An empty string means no default.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.config.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.config.validator = Some(validator);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Dim hint shown while the buffer is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Refuse input beyond `limit` characters.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }
}

/// Initial editing state: the default, if any, with the cursor after it.
pub(crate) fn seed(config: &PromptConfig) -> TextEditState {
    config
        .default_text()
        .map(TextEditState::seeded)
        .unwrap_or_default()
}

/// Editing transition plus logging of rejected submissions.
pub(crate) fn edit(
    config: &PromptConfig,
    state: TextEditState,
    event: &InputEvent,
    char_limit: Option<usize>,
) -> Transition<TextEditState, String> {
    let transition = update_text(state, event, config, char_limit);
    if let (InputEvent::Enter, Transition::Continue(next)) = (event, &transition) {
        if let Some(err) = &next.last_error {
            debug!(question = %config.question, %err, "validation failed");
        }
    }
    transition
}

impl Machine for TextPrompt {
    type State = TextEditState;
    type Output = String;

    fn kind(&self) -> &'static str {
        "text"
    }

    fn init(&self) -> TextEditState {
        seed(&self.config)
    }

    fn update(&self, state: TextEditState, event: &InputEvent) -> Transition<TextEditState, String> {
        edit(&self.config, state, event, self.char_limit)
    }

    fn view(&self, state: &TextEditState) -> Text<'static> {
        render_text(&self.config, state, None, self.placeholder.as_deref())
    }

    fn summary(&self, output: &String) -> Text<'static> {
        render_summary(&self.config, output)
    }
}

impl Prompt for TextPrompt {
    type Output = String;

    fn question(&self) -> &str {
        &self.config.question
    }

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.config.validate(input)
    }

    fn run_with(&self, session: &mut dyn Session) -> Result<String, PromptError> {
        drive(self, session)
    }

    fn frame_height(&self) -> u16 {
        TEXT_FRAME_HEIGHT
    }
}
