//! Prompt kinds and the machinery that runs them.
//!
//! Organized along the same boundaries for every kind:
//! - `state`: pure data (input events, per-kind interaction state)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `runner`: the event loop, the only part touching a session

pub mod confirm;
pub mod password;
pub mod runner;
pub mod select;
pub mod state;
pub mod text;
pub mod update;
pub mod view;

pub use confirm::ConfirmPrompt;
pub use password::PasswordPrompt;
pub use select::SelectPrompt;
pub use text::TextPrompt;

use crate::error::{PromptError, ValidationError};
use crate::session::{Session, TerminalSession};

/// Capability shared by every prompt kind.
pub trait Prompt {
    type Output;

    /// The question shown to the operator.
    fn question(&self) -> &str;

    /// Check `input` against the configured validator.
    ///
    /// Kinds without free-form input accept everything.
    fn validate(&self, input: &str) -> Result<(), ValidationError>;

    /// Run against an already-open session.
    fn run_with(&self, session: &mut dyn Session) -> Result<Self::Output, PromptError>;

    /// Rows the prompt needs on screen.
    fn frame_height(&self) -> u16;

    /// Structural checks that must pass before any terminal interaction.
    fn check(&self) -> Result<(), PromptError> {
        Ok(())
    }

    /// Open the terminal, ask, and restore the terminal.
    fn run(&self) -> Result<Self::Output, PromptError> {
        self.check()?;
        let mut session = TerminalSession::start(self.frame_height())?;
        let result = self.run_with(&mut session);
        session.finish()?;
        result
    }
}
