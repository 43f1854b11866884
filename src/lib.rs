//! askterm: interactive terminal prompts and declarative forms.
//!
//! Four prompt kinds (text, password, confirm, select) share one event
//! loop, and a [`schema::Form`] maps record fields to prompts from short
//! declarations such as `"confirm"` or `"list[a,b,c]"`.

pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod schema;
pub mod session;
pub mod theme;

pub use error::{PromptError, ValidationError};
pub use prompt::{ConfirmPrompt, PasswordPrompt, Prompt, SelectPrompt, TextPrompt};
pub use schema::{prompt_record, Form, Schema};
