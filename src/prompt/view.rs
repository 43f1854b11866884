//! Pure rendering: prompt state in, styled frame out.
//!
//! Each prompt kind has a dedicated render function producing a
//! [`Text`]. Nothing here touches the terminal; the session decides how a
//! frame reaches the screen.

use ratatui::text::{Line, Span, Text};

use crate::config::PromptConfig;

use super::state::{ConfirmState, ListState, TextEditState};

/// Prefix drawn before the editable input line.
const INPUT_PROMPT: &str = "> ";

/// Marker drawn next to the option under the cursor.
const LIST_MARKER: &str = ">";

// ============================================================================
// TEXT / PASSWORD
// ============================================================================

/// Question, optional validation error, then the input line.
///
/// With `mask` set every buffered character is drawn as that glyph.
pub fn render_text(
    config: &PromptConfig,
    state: &TextEditState,
    mask: Option<char>,
    placeholder: Option<&str>,
) -> Text<'static> {
    let theme = &config.theme;
    let mut lines = vec![Line::from(Span::styled(
        config.question.clone(),
        theme.question,
    ))];

    if let Some(err) = &state.last_error {
        lines.push(Line::from(Span::styled(err.to_string(), theme.error)));
    }

    let mut spans = vec![Span::raw(INPUT_PROMPT)];
    match placeholder.filter(|_| state.is_empty()) {
        Some(hint) => {
            let mut chars = hint.chars();
            let first = chars.next().unwrap_or(' ');
            spans.push(Span::styled(first.to_string(), theme.cursor));
            spans.push(Span::styled(chars.collect::<String>(), theme.unfocused));
        }
        None => {
            let shown: Vec<char> = match mask {
                Some(glyph) => state.buffer.chars().map(|_| glyph).collect(),
                None => state.buffer.chars().collect(),
            };
            let cursor = state.cursor.min(shown.len());
            let before: String = shown[..cursor].iter().collect();
            let under = shown.get(cursor).copied().unwrap_or(' ');
            let after: String = shown.get(cursor + 1..).unwrap_or_default().iter().collect();
            spans.push(Span::raw(before));
            spans.push(Span::styled(under.to_string(), theme.cursor));
            spans.push(Span::raw(after));
        }
    }
    lines.push(Line::from(spans));

    Text::from(lines)
}

// ============================================================================
// CONFIRM
// ============================================================================

/// Single line: question plus a suffix showing which answer Enter picks.
pub fn render_confirm(config: &PromptConfig, state: &ConfirmState) -> Text<'static> {
    Text::from(Line::from(vec![
        Span::styled(config.question.clone(), config.theme.question),
        Span::raw(format!(" {}: ", confirm_suffix(state.pending))),
    ]))
}

pub fn confirm_suffix(default: bool) -> &'static str {
    if default { "(Y/n)" } else { "(y/N)" }
}

// ============================================================================
// SELECT
// ============================================================================

/// Question, then the visible window of options.
///
/// Numbers are 1-based absolute positions, so paging never renumbers.
pub fn render_list(
    config: &PromptConfig,
    options: &[String],
    state: &ListState,
    show_numbers: bool,
) -> Text<'static> {
    let theme = &config.theme;
    let mut lines = vec![Line::from(Span::styled(
        config.question.clone(),
        theme.question,
    ))];

    for idx in state.visible() {
        let is_cursor = idx == state.cursor;
        let marker = if is_cursor {
            Span::styled(LIST_MARKER, theme.selection)
        } else {
            Span::raw(" ")
        };
        let prefix = if show_numbers {
            format!("{}) ", idx + 1)
        } else {
            String::new()
        };
        let style = if is_cursor { theme.focused } else { theme.unfocused };
        lines.push(Line::from(vec![
            marker,
            Span::raw(format!(" {prefix}")),
            Span::styled(options[idx].clone(), style),
        ]));
    }

    Text::from(lines)
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Final frame after an answer is accepted: `question answer`.
pub fn render_summary(config: &PromptConfig, answer: &str) -> Text<'static> {
    Text::from(Line::from(vec![
        Span::styled(config.question.clone(), config.theme.question),
        Span::raw(" "),
        Span::styled(answer.to_string(), config.theme.answer),
    ]))
}

/// Answer text with every char replaced by `glyph`.
pub fn masked(answer: &str, glyph: char) -> String {
    answer.chars().map(|_| glyph).collect()
}

// ============================================================================
// PLAIN TEXT
// ============================================================================

/// Strip styling: one `\n`-separated string per frame.
pub fn plain(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Style applied to the span containing `needle`, if any.
#[cfg(test)]
fn style_of(text: &Text<'_>, needle: &str) -> Option<ratatui::style::Style> {
    text.lines
        .iter()
        .flat_map(|line| line.spans.iter())
        .find(|span| span.content.contains(needle))
        .map(|span| span.style)
}

// ============================================================================
// TESTS
// ============================================================================
