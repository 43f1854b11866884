//! Declarative forms: per-field tags drive a sequence of prompts whose
//! answers are written back into a caller-owned record.
//!
//! - `tag`: the declaration grammar (`text`, `password`, `confirm`, `list[...]`)
//! - `form`: field descriptors with typed setters, and the orchestrator

pub mod form;
pub mod tag;

pub use form::{prompt_record, Field, FieldPrompt, FieldSpec, Form, Schema};
pub use tag::{parse_tag, FieldTag, PromptKind};

use std::fmt;

use serde::Serialize;

/// Value type a record field declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Bool,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => f.write_str("text"),
            FieldType::Bool => f.write_str("bool"),
        }
    }
}

/// A prompt's result before it is assigned to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Bool(bool),
}

impl Answer {
    pub fn field_type(&self) -> FieldType {
        match self {
            Answer::Text(_) => FieldType::Text,
            Answer::Bool(_) => FieldType::Bool,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(text) => f.write_str(text),
            Answer::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Bool(value)
    }
}

/// Rust types a form field may hold.
pub trait FieldValue: Sized {
    const TYPE: FieldType;

    /// Unwrap an answer of the matching type.
    fn from_answer(answer: Answer) -> Option<Self>;
}

impl FieldValue for String {
    const TYPE: FieldType = FieldType::Text;

    fn from_answer(answer: Answer) -> Option<Self> {
        match answer {
            Answer::Text(text) => Some(text),
            Answer::Bool(_) => None,
        }
    }
}

impl FieldValue for bool {
    const TYPE: FieldType = FieldType::Bool;

    fn from_answer(answer: Answer) -> Option<Self> {
        match answer {
            Answer::Bool(value) => Some(value),
            Answer::Text(_) => None,
        }
    }
}
