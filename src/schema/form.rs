//! Schema orchestrator: walk field descriptors in order, prompt for each,
//! assign typed results back into the record.
//!
//! Fields are registered explicitly with a setter closure whose argument
//! type fixes the field's declared type. A `confirm` tag on a `String`
//! setter is therefore caught before the operator is asked anything.
//!
//! Processing stops at the first error. Fields assigned before the failing
//! one keep their new values; there is no rollback.

use std::fmt;

use tracing::{debug, warn};

use crate::config::{PromptConfig, Validator};
use crate::error::{PromptError, ValidationError};
use crate::prompt::{ConfirmPrompt, PasswordPrompt, Prompt, SelectPrompt, TextPrompt};
use crate::session::Session;
use crate::theme::Theme;

use super::tag::{parse_tag, PromptKind};
use super::{Answer, FieldType, FieldValue};

type Setter<R> = Box<dyn Fn(&mut R, Answer) -> Result<(), FieldType>>;

// ============================================================================
// FIELD DESCRIPTORS
// ============================================================================

/// One record field: its declaration tag and how to store the answer.
pub struct Field<R> {
    name: String,
    tag: String,
    question: Option<String>,
    default: Option<String>,
    validator: Option<Validator>,
    declared: FieldType,
    setter: Setter<R>,
}

impl<R> Field<R> {
    /// `setter` receives the answer already converted to `V`.
    pub fn new<V, F>(name: impl Into<String>, tag: impl Into<String>, setter: F) -> Self
    where
        R: 'static,
        V: FieldValue + 'static,
        F: Fn(&mut R, V) + 'static,
    {
        Field {
            name: name.into(),
            tag: tag.into(),
            question: None,
            default: None,
            validator: None,
            declared: V::TYPE,
            setter: Box::new(move |record, answer| {
                let found = answer.field_type();
                let value = V::from_answer(answer).ok_or(found)?;
                setter(record, value);
                Ok(())
            }),
        }
    }

    /// Ask this instead of the field name.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Untyped default handed to the prompt (buffer, boolean word, or option).
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn declared_type(&self) -> FieldType {
        self.declared
    }

    /// Parse and validate the declaration. `Ok(None)` means skip.
    pub fn spec(&self) -> Result<Option<FieldSpec>, PromptError> {
        let Some(tag) = parse_tag(&self.tag) else {
            return Ok(None);
        };
        let kind = PromptKind::resolve(&tag)?;

        let found = kind.output_type();
        if found != self.declared {
            return Err(PromptError::TypeMismatch {
                field: self.name.clone(),
                expected: self.declared,
                found,
            });
        }
        if kind == PromptKind::List && tag.options.is_empty() {
            return Err(PromptError::NoOptions);
        }

        Ok(Some(FieldSpec {
            field: self.name.clone(),
            kind,
            options: tag.options,
        }))
    }

    fn config(&self, theme: Theme) -> PromptConfig {
        PromptConfig {
            question: self.question.clone().unwrap_or_else(|| self.name.clone()),
            default: self.default.clone(),
            validator: self.validator.clone(),
            theme,
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("declared", &self.declared)
            .finish_non_exhaustive()
    }
}

/// A field's parsed declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: String,
    pub kind: PromptKind,
    pub options: Vec<String>,
}

// ============================================================================
// PROMPT DISPATCH
// ============================================================================

/// The prompt built for one field, one variant per kind.
#[derive(Debug, Clone)]
pub enum FieldPrompt {
    Text(TextPrompt),
    Password(PasswordPrompt),
    Confirm(ConfirmPrompt),
    Select(SelectPrompt),
}

impl FieldPrompt {
    pub fn build(spec: &FieldSpec, config: PromptConfig) -> Self {
        match spec.kind {
            PromptKind::Text => FieldPrompt::Text(TextPrompt::from_config(config)),
            PromptKind::Password => FieldPrompt::Password(PasswordPrompt::from_config(config)),
            PromptKind::Confirm => FieldPrompt::Confirm(ConfirmPrompt::from_config(config)),
            PromptKind::List => {
                FieldPrompt::Select(SelectPrompt::from_config(config, spec.options.clone()))
            }
        }
    }
}

impl Prompt for FieldPrompt {
    type Output = Answer;

    fn question(&self) -> &str {
        match self {
            FieldPrompt::Text(p) => p.question(),
            FieldPrompt::Password(p) => p.question(),
            FieldPrompt::Confirm(p) => p.question(),
            FieldPrompt::Select(p) => p.question(),
        }
    }

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            FieldPrompt::Text(p) => p.validate(input),
            FieldPrompt::Password(p) => p.validate(input),
            FieldPrompt::Confirm(p) => p.validate(input),
            FieldPrompt::Select(p) => p.validate(input),
        }
    }

    fn run_with(&self, session: &mut dyn Session) -> Result<Answer, PromptError> {
        match self {
            FieldPrompt::Text(p) => p.run_with(session).map(Answer::from),
            FieldPrompt::Password(p) => p.run_with(session).map(Answer::from),
            FieldPrompt::Confirm(p) => p.run_with(session).map(Answer::from),
            FieldPrompt::Select(p) => p.run_with(session).map(Answer::from),
        }
    }

    fn frame_height(&self) -> u16 {
        match self {
            FieldPrompt::Text(p) => p.frame_height(),
            FieldPrompt::Password(p) => p.frame_height(),
            FieldPrompt::Confirm(p) => p.frame_height(),
            FieldPrompt::Select(p) => p.frame_height(),
        }
    }

    fn check(&self) -> Result<(), PromptError> {
        match self {
            FieldPrompt::Select(p) => p.check(),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// FORM
// ============================================================================

/// Ordered field descriptors for records of type `R`.
pub struct Form<R> {
    fields: Vec<Field<R>>,
    theme: Theme,
}

impl<R> Default for Form<R> {
    fn default() -> Self {
        Form {
            fields: Vec::new(),
            theme: Theme::default(),
        }
    }
}

impl<R> Form<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field in declaration order.
    pub fn field<V, F>(self, name: impl Into<String>, tag: impl Into<String>, setter: F) -> Self
    where
        R: 'static,
        V: FieldValue + 'static,
        F: Fn(&mut R, V) + 'static,
    {
        self.push(Field::new(name, tag, setter))
    }

    pub fn push(mut self, field: Field<R>) -> Self {
        self.fields.push(field);
        self
    }

    /// Theme for every prompt this form builds.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    /// Parse every declaration, in order, without prompting.
    ///
    /// Fails on the first unknown kind, type mismatch, or empty list.
    pub fn specs(&self) -> Result<Vec<FieldSpec>, PromptError> {
        let mut specs = Vec::new();
        for field in &self.fields {
            if let Some(spec) = field.spec()? {
                specs.push(spec);
            }
        }
        Ok(specs)
    }

    /// Reject a misconfigured form before any terminal interaction.
    pub fn check(&self) -> Result<(), PromptError> {
        self.specs().map(|_| ())
    }

    /// Prompt for every tagged field on the live terminal.
    ///
    /// Each prompt opens and restores its own session.
    pub fn fill(&self, record: &mut R) -> Result<(), PromptError> {
        self.fill_by(record, |prompt| prompt.run())
    }

    /// Prompt for every tagged field over `session`, one prompt at a time.
    pub fn fill_with(&self, record: &mut R, session: &mut dyn Session) -> Result<(), PromptError> {
        self.fill_by(record, |prompt| prompt.run_with(&mut *session))
    }

    fn fill_by<F>(&self, record: &mut R, mut ask: F) -> Result<(), PromptError>
    where
        F: FnMut(&FieldPrompt) -> Result<Answer, PromptError>,
    {
        for field in &self.fields {
            let spec = match field.spec() {
                Ok(Some(spec)) => spec,
                Ok(None) => {
                    debug!(field = %field.name, "no declaration, skipped");
                    continue;
                }
                Err(err) => {
                    warn!(field = %field.name, tag = %field.tag, %err, "bad field declaration");
                    return Err(err);
                }
            };

            let prompt = FieldPrompt::build(&spec, field.config(self.theme));
            let answer = ask(&prompt)?;

            (field.setter)(record, answer).map_err(|found| PromptError::TypeMismatch {
                field: field.name.clone(),
                expected: field.declared,
                found,
            })?;
            debug!(field = %field.name, kind = %spec.kind, "field assigned");
        }
        Ok(())
    }
}

impl<R> fmt::Debug for Form<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .field("theme", &self.theme)
            .finish()
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// A record type that knows its own form.
pub trait Schema: Sized {
    fn form() -> Form<Self>;
}

/// Fill `record` interactively from its schema.
pub fn prompt_record<R: Schema>(record: &mut R) -> Result<(), PromptError> {
    R::form().fill(record)
}

// ============================================================================
// TESTS
// ============================================================================
