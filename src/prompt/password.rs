//! Masked text prompt. Identical to the text prompt except for rendering:
//! the buffer is never drawn, each character shows as the mask glyph.

use ratatui::text::Text;

use crate::config::{PromptConfig, Validator};
use crate::error::{PromptError, ValidationError};
use crate::session::Session;
use crate::theme::Theme;

use super::runner::{drive, Machine};
use super::state::{InputEvent, TextEditState, Transition};
use super::text::{edit, seed, TEXT_FRAME_HEIGHT};
use super::view::{masked, render_summary, render_text};
use super::Prompt;

pub const DEFAULT_MASK: char = '•';

#[derive(Debug, Clone)]
pub struct PasswordPrompt {
    config: PromptConfig,
    mask: char,
}

impl PasswordPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self::from_config(PromptConfig::new(question))
    }

    pub fn from_config(config: PromptConfig) -> Self {
        PasswordPrompt {
            config,
            mask: DEFAULT_MASK,
        }
    }

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

    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }
}

impl Machine for PasswordPrompt {
    type State = TextEditState;
    type Output = String;

    fn kind(&self) -> &'static str {
        "password"
    }

    fn init(&self) -> TextEditState {
        seed(&self.config)
    }

    fn update(&self, state: TextEditState, event: &InputEvent) -> Transition<TextEditState, String> {
        edit(&self.config, state, event, None)
    }

    fn view(&self, state: &TextEditState) -> Text<'static> {
        render_text(&self.config, state, Some(self.mask), None)
    }

    fn summary(&self, output: &String) -> Text<'static> {
        render_summary(&self.config, &masked(output, self.mask))
    }
}

impl Prompt for PasswordPrompt {
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
