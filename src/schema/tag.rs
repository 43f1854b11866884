//! Field declaration grammar.
//!
//! ```text
//! decl      := "text" | "password" | "confirm" | list_decl
//! list_decl := "list[" option ("," option)* "]"
//! option    := any chars except ',' or ']' (whitespace trimmed)
//! ```
//!
//! The parser never fails. Anything that is not a well-formed list
//! declaration comes back as a bare kind name; deciding whether that name
//! exists is the caller's job (see [`PromptKind::resolve`]).

use std::fmt;

use super::FieldType;
use crate::error::PromptError;

/// Parsed form of one field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag {
    /// Kind name as written (`list` for list declarations).
    pub kind: String,
    /// Options of a list declaration, trimmed, in order.
    pub options: Vec<String>,
}

/// Parse a declaration. Empty (or all-whitespace) means "skip this field".
pub fn parse_tag(decl: &str) -> Option<FieldTag> {
    let content = decl.trim();
    if content.is_empty() {
        return None;
    }

    if let Some(body) = list_body(content) {
        let options = body.split(',').map(|o| o.trim().to_string()).collect();
        return Some(FieldTag {
            kind: "list".to_string(),
            options,
        });
    }

    Some(FieldTag {
        kind: content.to_string(),
        options: Vec::new(),
    })
}

/// Inside of `list[...]` / `select[...]`, when the brackets are balanced.
fn list_body(content: &str) -> Option<&str> {
    let rest = content
        .strip_prefix("list[")
        .or_else(|| content.strip_prefix("select["))?;
    let body = rest.strip_suffix(']')?;
    // an option may not contain a bracket
    if body.contains(['[', ']']) {
        return None;
    }
    Some(body)
}

/// The four prompt kinds a declaration can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Password,
    Confirm,
    List,
}

impl PromptKind {
    /// Classify a parsed tag. Unrecognised names (including malformed
    /// list declarations) are an [`PromptError::UnknownKind`].
    pub fn resolve(tag: &FieldTag) -> Result<Self, PromptError> {
        match tag.kind.as_str() {
            "text" => Ok(PromptKind::Text),
            "password" => Ok(PromptKind::Password),
            "confirm" => Ok(PromptKind::Confirm),
            "list" => Ok(PromptKind::List),
            other => Err(PromptError::UnknownKind(other.to_string())),
        }
    }

    /// Type of value a prompt of this kind produces.
    pub fn output_type(self) -> FieldType {
        match self {
            PromptKind::Confirm => FieldType::Bool,
            PromptKind::Text | PromptKind::Password | PromptKind::List => FieldType::Text,
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PromptKind::Text => "text",
            PromptKind::Password => "password",
            PromptKind::Confirm => "confirm",
            PromptKind::List => "list",
        };
        f.write_str(name)
    }
}
