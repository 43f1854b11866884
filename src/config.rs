//! Configuration shared by every prompt kind.

use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::theme::Theme;

/// Caller-supplied input check. `Err` keeps the operator editing.
pub type Validator = Arc<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Immutable settings for one prompt.
///
/// `default` is untyped text for every kind; each kind interprets it
/// (pre-filled buffer, boolean word, or option to preselect).
#[derive(Clone)]
pub struct PromptConfig {
    pub question: String,
    pub default: Option<String>,
    pub validator: Option<Validator>,
    pub theme: Theme,
}

impl PromptConfig {
    pub fn new(question: impl Into<String>) -> Self {
        PromptConfig {
            question: question.into(),
            default: None,
            validator: None,
            theme: Theme::default(),
        }
    }

    /// Run the validator, if any, against `input`.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match &self.validator {
            Some(validator) => validator(input),
            None => Ok(()),
        }
    }

    /// The default, treating an empty string as absent.
    pub fn default_text(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

impl fmt::Debug for PromptConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptConfig")
            .field("question", &self.question)
            .field("default", &self.default)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("theme", &self.theme)
            .finish()
    }
}

/// Parse a boolean word used as a confirm default.
///
/// `y`, `yes`, `true` and `1` (any case) are true; anything else is false.
pub fn parse_bool_word(word: &str) -> bool {
    matches!(
        word.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}

/// Build a validator from a closure.
pub fn validator<F>(f: F) -> Validator
where
    F: Fn(&str) -> Result<(), ValidationError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Validator rejecting input shorter than `min` characters.
pub fn min_length(min: usize) -> Validator {
    validator(move |input| {
        if input.chars().count() < min {
            Err(ValidationError(format!(
                "must be at least {min} characters long"
            )))
        } else {
            Ok(())
        }
    })
}

/// Validator rejecting empty (or all-whitespace) input.
pub fn required() -> Validator {
    validator(|input| {
        if input.trim().is_empty() {
            Err(ValidationError::new("a value is required"))
        } else {
            Ok(())
        }
    })
}
