//! Prompt state algebra: pure types, zero effects.
//!
//! These types define the whole interaction state space. The transition
//! functions in `update` and the renderers in `view` both program against
//! them. A state value is built fresh for every run and dropped when the
//! run ends; nothing here is reused across runs.

use crate::error::ValidationError;

// ============================================================================
// INPUT EVENTS
// ============================================================================

/// Semantic input event, decoupled from raw terminal key codes.
///
/// The session maps key presses to these; the transition functions decide
/// what each one means per prompt kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character (including `y`/`n`/`j`/`k`).
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    /// Remove everything before the cursor (Ctrl+U).
    ClearToStart,
    /// Remove everything after the cursor (Ctrl+K).
    ClearToEnd,
    /// Remove the word before the cursor (Ctrl+W).
    DeleteWord,
    /// Hard interrupt (Ctrl+C).
    Interrupt,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// `Continue` carries the next state to render; the other two variants are
/// terminal and end the run.
#[derive(Debug, PartialEq)]
pub enum Transition<S, T> {
    /// Keep interacting with this state.
    Continue(S),
    /// The operator committed an answer.
    Accept(T),
    /// The operator pressed the interrupt key.
    Interrupt,
}

// ============================================================================
// TEXT / PASSWORD
// ============================================================================

/// Editing state shared by Text and Password prompts.
///
/// `cursor` is a char index into `buffer`, always `<= buffer.chars().count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditState {
    pub buffer: String,
    pub cursor: usize,
    /// Set by a failed validation, shown until the next Enter.
    pub last_error: Option<ValidationError>,
}

impl TextEditState {
    /// Start with `initial` in the buffer and the cursor after it.
    pub fn seeded(initial: &str) -> Self {
        TextEditState {
            buffer: initial.to_string(),
            cursor: initial.chars().count(),
            last_error: None,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Byte offset of char index `idx` (clamped to the end).
    pub(crate) fn byte_index(&self, idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(idx)
            .map(|(b, _)| b)
            .unwrap_or(self.buffer.len())
    }
}

// ============================================================================
// CONFIRM
// ============================================================================

/// Confirm prompt state: the value Enter would commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmState {
    pub pending: bool,
}

// ============================================================================
// SELECT
// ============================================================================

/// Cursor and paging window over a non-empty option list.
///
/// Invariants: `cursor < len`, `offset <= cursor`,
/// `cursor < offset + page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListState {
    pub cursor: usize,
    pub offset: usize,
    pub len: usize,
    pub page_size: usize,
}

impl ListState {
    /// Place the cursor at `start` (clamped) with the window scrolled just
    /// far enough to show it. Returns `None` for an empty list.
    pub fn new(len: usize, page_size: usize, start: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let page_size = page_size.max(1);
        let cursor = start.min(len - 1);
        let offset = (cursor + 1).saturating_sub(page_size);
        Some(ListState {
            cursor,
            offset,
            len,
            page_size,
        })
    }

    /// Index range of the options currently on screen.
    pub fn visible(&self) -> std::ops::Range<usize> {
        self.offset..(self.offset + self.page_size).min(self.len)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_buffer_puts_cursor_at_end() {
        let state = TextEditState::seeded("héllo");
        assert_eq!(state.buffer, "héllo");
        assert_eq!(state.cursor, 5);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn byte_index_handles_multibyte() {
        let state = TextEditState::seeded("aéb");
        assert_eq!(state.byte_index(0), 0);
        assert_eq!(state.byte_index(1), 1);
        assert_eq!(state.byte_index(2), 3);
        assert_eq!(state.byte_index(3), 4);
        assert_eq!(state.byte_index(10), 4);
    }

    #[test]
    fn list_state_rejects_empty() {
        assert_eq!(ListState::new(0, 7, 0), None);
    }

    #[test]
    fn list_state_starts_at_top() {
        let state = ListState::new(10, 7, 0).unwrap();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.offset, 0);
        assert_eq!(state.visible(), 0..7);
    }

    #[test]
    fn list_state_scrolls_to_preselection() {
        let state = ListState::new(10, 3, 8).unwrap();
        assert_eq!(state.cursor, 8);
        assert_eq!(state.offset, 6);
        assert_eq!(state.visible(), 6..9);
    }

    #[test]
    fn list_state_clamps_start_and_page() {
        let state = ListState::new(4, 0, 99).unwrap();
        assert_eq!(state.page_size, 1);
        assert_eq!(state.cursor, 3);
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn short_list_window_is_clipped() {
        let state = ListState::new(3, 7, 0).unwrap();
        assert_eq!(state.visible(), 0..3);
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1: Transition<ConfirmState, bool> = Transition::Continue(ConfirmState { pending: true });
        let t2: Transition<ConfirmState, bool> = Transition::Accept(true);
        let t3: Transition<ConfirmState, bool> = Transition::Interrupt;
        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
    }
}
