//! Single choice from a paged list of options.

use ratatui::text::Text;

use crate::config::PromptConfig;
use crate::error::{PromptError, ValidationError};
use crate::session::Session;
use crate::theme::Theme;

use super::runner::{drive, Machine};
use super::state::{InputEvent, ListState, Transition};
use super::update::update_list;
use super::view::{render_list, render_summary};
use super::Prompt;

pub const DEFAULT_PAGE_SIZE: usize = 7;

#[derive(Debug, Clone)]
pub struct SelectPrompt {
    config: PromptConfig,
    options: Vec<String>,
    selected: Option<usize>,
    page_size: usize,
    show_numbers: bool,
}

impl SelectPrompt {
    pub fn new<I, S>(question: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_config(PromptConfig::new(question), options)
    }

    pub fn from_config<I, S>(config: PromptConfig, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectPrompt {
            config,
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
            page_size: DEFAULT_PAGE_SIZE,
            show_numbers: true,
        }
    }

    /// Preselect the option equal to `default`. Unknown text is ignored.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.config.default = Some(default.into());
        self
    }

    /// Preselect by index (clamped to the last option).
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// Options visible at once. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_numbers(mut self, show: bool) -> Self {
        self.show_numbers = show;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Index the cursor starts on.
    fn start_index(&self) -> usize {
        self.selected
            .or_else(|| {
                let default = self.config.default_text()?;
                self.options.iter().position(|o| o == default)
            })
            .unwrap_or(0)
    }
}

impl Machine for SelectPrompt {
    type State = ListState;
    type Output = String;

    fn kind(&self) -> &'static str {
        "select"
    }

    // run_with checks for options before driving, so this never sees an
    // empty list; the fallback keeps init total.
    fn init(&self) -> ListState {
        ListState::new(self.options.len(), self.page_size, self.start_index()).unwrap_or(ListState {
            cursor: 0,
            offset: 0,
            len: 1,
            page_size: self.page_size,
        })
    }

    fn update(&self, state: ListState, event: &InputEvent) -> Transition<ListState, String> {
        match update_list(state, event) {
            Transition::Continue(next) => Transition::Continue(next),
            Transition::Accept(idx) => Transition::Accept(self.options[idx].clone()),
            Transition::Interrupt => Transition::Interrupt,
        }
    }

    fn view(&self, state: &ListState) -> Text<'static> {
        render_list(&self.config, &self.options, state, self.show_numbers)
    }

    fn summary(&self, output: &String) -> Text<'static> {
        render_summary(&self.config, output)
    }
}

impl Prompt for SelectPrompt {
    type Output = String;

    fn question(&self) -> &str {
        &self.config.question
    }

    fn validate(&self, _input: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    fn check(&self) -> Result<(), PromptError> {
        if self.options.is_empty() {
            return Err(PromptError::NoOptions);
        }
        Ok(())
    }

    fn run_with(&self, session: &mut dyn Session) -> Result<String, PromptError> {
        self.check()?;
        drive(self, session)
    }

    fn frame_height(&self) -> u16 {
        let rows = self.page_size.min(self.options.len()).max(1) + 1;
        u16::try_from(rows).unwrap_or(u16::MAX)
    }
}
