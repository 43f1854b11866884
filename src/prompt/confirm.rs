//! Yes/no prompt.

use ratatui::text::Text;

use crate::config::{parse_bool_word, PromptConfig};
use crate::error::{PromptError, ValidationError};
use crate::session::Session;
use crate::theme::Theme;

use super::runner::{drive, Machine};
use super::state::{ConfirmState, InputEvent, Transition};
use super::update::update_confirm;
use super::view::{render_confirm, render_summary};
use super::Prompt;

/// y/n commit immediately; Enter takes the default.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    config: PromptConfig,
    default: Option<bool>,
}

impl ConfirmPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self::from_config(PromptConfig::new(question))
    }

    pub fn from_config(config: PromptConfig) -> Self {
        ConfirmPrompt {
            config,
            default: None,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    /// Default given as a word (`yes`, `n`, `true`...), as in a config file.
    pub fn with_default_text(mut self, default: impl Into<String>) -> Self {
        self.config.default = Some(default.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Value Enter commits: the explicit default, else the default text,
    /// else false.
    pub fn default_value(&self) -> bool {
        self.default
            .or_else(|| self.config.default_text().map(parse_bool_word))
            .unwrap_or(false)
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }
}

impl Machine for ConfirmPrompt {
    type State = ConfirmState;
    type Output = bool;

    fn kind(&self) -> &'static str {
        "confirm"
    }

    fn init(&self) -> ConfirmState {
        ConfirmState {
            pending: self.default_value(),
        }
    }

    fn update(&self, state: ConfirmState, event: &InputEvent) -> Transition<ConfirmState, bool> {
        update_confirm(state, event)
    }

    fn view(&self, state: &ConfirmState) -> Text<'static> {
        render_confirm(&self.config, state)
    }

    fn summary(&self, output: &bool) -> Text<'static> {
        render_summary(&self.config, if *output { "Yes" } else { "No" })
    }
}

impl Prompt for ConfirmPrompt {
    type Output = bool;

    fn question(&self) -> &str {
        &self.config.question
    }

    fn validate(&self, _input: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    fn run_with(&self, session: &mut dyn Session) -> Result<bool, PromptError> {
        drive(self, session)
    }

    fn frame_height(&self) -> u16 {
        1
    }
}
