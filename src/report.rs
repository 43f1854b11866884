//! Answer formatting for the command-line front end.
//!
//! Pure functions: (AnswerSheet, OutputFormat) -> String.
//! No I/O, no side effects.

use serde::{Serialize, Serializer};

use crate::schema::Answer;

/// Output format for collected answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Question: answer` lines.
    #[default]
    Human,
    /// One JSON object keyed by field, in the order asked.
    Json,
}

/// Answers in the order they were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: Vec<(String, Answer)>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, answer: impl Into<Answer>) {
        self.entries.push((field.into(), answer.into()));
    }

    pub fn entries(&self) -> &[(String, Answer)] {
        &self.entries
    }
}

impl Serialize for AnswerSheet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(field, answer)| (field, answer)))
    }
}

/// Format collected answers for output.
pub fn format_answers(sheet: &AnswerSheet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(sheet),
        OutputFormat::Json => format_json(sheet),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(sheet: &AnswerSheet) -> String {
    let mut out = String::new();
    for (field, answer) in &sheet.entries {
        out.push_str(&format!("{field}: {answer}\n"));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(sheet: &AnswerSheet) -> String {
    // String keys and plain values cannot fail to serialize
    serde_json::to_string_pretty(sheet).unwrap_or_else(|e| {
        panic!("Failed to serialize answers to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
