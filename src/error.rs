//! Error types shared by prompts and forms.
//!
//! Two tiers:
//! - [`ValidationError`]: caller-supplied validator rejected the input.
//!   Never escapes a prompt; it is shown and the operator keeps editing.
//! - [`PromptError`]: anything that ends a run or a whole form.

use std::io;

use thiserror::Error;

use crate::schema::FieldType;

/// Rejection message produced by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }
}

/// Fatal outcome of running a prompt or a form.
#[derive(Debug, Error)]
pub enum PromptError {
    /// A field declaration names a prompt kind that does not exist.
    #[error("unknown prompt type: {0}")]
    UnknownKind(String),

    /// A select prompt has nothing to choose from.
    #[error("no options provided")]
    NoOptions,

    /// The prompt kind produces a value the field cannot hold.
    #[error("field {field}: {found} prompt cannot fill a {expected} field")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: FieldType,
    },

    /// The operator pressed the interrupt key.
    #[error("prompt interrupted")]
    Interrupted,

    /// The terminal could not be set up, read, or drawn to.
    #[error("terminal session failed: {0}")]
    Session(#[from] io::Error),
}

impl PromptError {
    /// True for configuration problems (as opposed to session or operator outcomes).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            PromptError::UnknownKind(_) | PromptError::NoOptions | PromptError::TypeMismatch { .. }
        )
    }
}
