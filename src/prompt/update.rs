//! Pure state transitions: (State, InputEvent) -> Transition.
//!
//! This is the core logic of every prompt. Fully testable without a
//! terminal. Events a prompt kind does not understand return the current
//! state unchanged.

use crate::config::PromptConfig;

use super::state::{ConfirmState, InputEvent, ListState, TextEditState, Transition};

// ============================================================================
// TEXT / PASSWORD
// ============================================================================

/// Editing transition shared by Text and Password.
///
/// Enter runs the validator: on failure the error is recorded and the
/// buffer kept; on success the buffer is the answer.
pub fn update_text(
    mut state: TextEditState,
    event: &InputEvent,
    config: &PromptConfig,
    char_limit: Option<usize>,
) -> Transition<TextEditState, String> {
    match event {
        InputEvent::Enter => match config.validate(&state.buffer) {
            Ok(()) => Transition::Accept(state.buffer),
            Err(err) => {
                state.last_error = Some(err);
                Transition::Continue(state)
            }
        },
        InputEvent::Interrupt => Transition::Interrupt,
        InputEvent::Char(c) => {
            let full = char_limit.is_some_and(|limit| state.len() >= limit);
            if !c.is_control() && !full {
                let at = state.byte_index(state.cursor);
                state.buffer.insert(at, *c);
                state.cursor += 1;
            }
            Transition::Continue(state)
        }
        InputEvent::Backspace => {
            if state.cursor > 0 {
                state.cursor -= 1;
                let at = state.byte_index(state.cursor);
                state.buffer.remove(at);
            }
            Transition::Continue(state)
        }
        InputEvent::Delete => {
            if state.cursor < state.len() {
                let at = state.byte_index(state.cursor);
                state.buffer.remove(at);
            }
            Transition::Continue(state)
        }
        InputEvent::Left => {
            state.cursor = state.cursor.saturating_sub(1);
            Transition::Continue(state)
        }
        InputEvent::Right => {
            state.cursor = (state.cursor + 1).min(state.len());
            Transition::Continue(state)
        }
        InputEvent::Home => {
            state.cursor = 0;
            Transition::Continue(state)
        }
        InputEvent::End => {
            state.cursor = state.len();
            Transition::Continue(state)
        }
        InputEvent::ClearToStart => {
            let at = state.byte_index(state.cursor);
            state.buffer.drain(..at);
            state.cursor = 0;
            Transition::Continue(state)
        }
        InputEvent::ClearToEnd => {
            let at = state.byte_index(state.cursor);
            state.buffer.truncate(at);
            Transition::Continue(state)
        }
        InputEvent::DeleteWord => {
            let start = word_start(&state);
            let from = state.byte_index(start);
            let to = state.byte_index(state.cursor);
            state.buffer.drain(from..to);
            state.cursor = start;
            Transition::Continue(state)
        }
        InputEvent::Up | InputEvent::Down => Transition::Continue(state),
    }
}

/// Char index where the word before the cursor begins
/// (trailing whitespace is swallowed with it).
fn word_start(state: &TextEditState) -> usize {
    let before: Vec<char> = state.buffer.chars().take(state.cursor).collect();
    let mut idx = before.len();
    while idx > 0 && before[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !before[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

// ============================================================================
// CONFIRM
// ============================================================================

/// y/n commit immediately; Enter commits whatever is pending (the default).
pub fn update_confirm(state: ConfirmState, event: &InputEvent) -> Transition<ConfirmState, bool> {
    match event {
        InputEvent::Char('y' | 'Y') => Transition::Accept(true),
        InputEvent::Char('n' | 'N') => Transition::Accept(false),
        InputEvent::Enter => Transition::Accept(state.pending),
        InputEvent::Interrupt => Transition::Interrupt,
        _ => Transition::Continue(state),
    }
}

// ============================================================================
// SELECT
// ============================================================================

/// Cursor movement over the option list. The accepted value is the index
/// of the chosen option. Movement clamps at both ends; it never wraps.
pub fn update_list(mut state: ListState, event: &InputEvent) -> Transition<ListState, usize> {
    match event {
        InputEvent::Up | InputEvent::Char('k') => {
            state.cursor = state.cursor.saturating_sub(1);
            state.offset = state.offset.min(state.cursor);
            Transition::Continue(state)
        }
        InputEvent::Down | InputEvent::Char('j') => {
            state.cursor = (state.cursor + 1).min(state.len - 1);
            state.offset = state
                .offset
                .max((state.cursor + 1).saturating_sub(state.page_size));
            Transition::Continue(state)
        }
        InputEvent::Home | InputEvent::Char('g') => {
            state.cursor = 0;
            state.offset = 0;
            Transition::Continue(state)
        }
        InputEvent::End | InputEvent::Char('G') => {
            state.cursor = state.len - 1;
            state.offset = state.len.saturating_sub(state.page_size);
            Transition::Continue(state)
        }
        InputEvent::Enter => Transition::Accept(state.cursor),
        InputEvent::Interrupt => Transition::Interrupt,
        _ => Transition::Continue(state),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::min_length;
    use proptest::prelude::*;

    fn plain_config() -> PromptConfig {
        PromptConfig::new("q")
    }

    fn type_str(mut state: TextEditState, input: &str, config: &PromptConfig) -> TextEditState {
        for c in input.chars() {
            state = match update_text(state, &InputEvent::Char(c), config, None) {
                Transition::Continue(s) => s,
                other => panic!("Expected Continue, got {:?}", other),
            };
        }
        state
    }

    fn apply_text(state: TextEditState, event: InputEvent) -> TextEditState {
        match update_text(state, &event, &plain_config(), None) {
            Transition::Continue(s) => s,
            other => panic!("Expected Continue, got {:?}", other),
        }
    }

    fn apply_list(state: ListState, event: InputEvent) -> ListState {
        match update_list(state, &event) {
            Transition::Continue(s) => s,
            other => panic!("Expected Continue, got {:?}", other),
        }
    }

    // -- Text --

    #[test]
    fn typing_appends_and_moves_cursor() {
        let state = type_str(TextEditState::default(), "abc", &plain_config());
        assert_eq!(state.buffer, "abc");
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn enter_without_validator_accepts_buffer() {
        let state = type_str(TextEditState::default(), "hi", &plain_config());
        let result = update_text(state, &InputEvent::Enter, &plain_config(), None);
        assert_eq!(result, Transition::Accept("hi".to_string()));
    }

    #[test]
    fn failing_validator_keeps_editing() {
        let mut config = plain_config();
        config.validator = Some(min_length(8));
        let state = type_str(TextEditState::default(), "abc", &config);
        match update_text(state, &InputEvent::Enter, &config, None) {
            Transition::Continue(state) => {
                assert_eq!(state.buffer, "abc");
                assert!(state.last_error.is_some());
            }
            other => panic!("Expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn passing_validator_accepts_exact_input() {
        let mut config = plain_config();
        config.validator = Some(min_length(8));
        let state = type_str(TextEditState::default(), "abcdefgh", &config);
        let result = update_text(state, &InputEvent::Enter, &config, None);
        assert_eq!(result, Transition::Accept("abcdefgh".to_string()));
    }

    #[test]
    fn error_survives_further_typing() {
        let mut config = plain_config();
        config.validator = Some(min_length(8));
        let state = type_str(TextEditState::default(), "abc", &config);
        let state = match update_text(state, &InputEvent::Enter, &config, None) {
            Transition::Continue(s) => s,
            other => panic!("Expected Continue, got {:?}", other),
        };
        let state = type_str(state, "d", &config);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn interrupt_is_terminal() {
        let state = TextEditState::seeded("partial");
        let result = update_text(state, &InputEvent::Interrupt, &plain_config(), None);
        assert_eq!(result, Transition::Interrupt);
    }

    #[test]
    fn insert_in_middle() {
        let state = TextEditState::seeded("ac");
        let state = apply_text(state, InputEvent::Left);
        let state = type_str(state, "b", &plain_config());
        assert_eq!(state.buffer, "abc");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn backspace_and_delete() {
        let state = TextEditState::seeded("abcd");
        let state = apply_text(state, InputEvent::Backspace);
        assert_eq!(state.buffer, "abc");
        let state = apply_text(state, InputEvent::Home);
        let state = apply_text(state, InputEvent::Delete);
        assert_eq!(state.buffer, "bc");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let state = apply_text(TextEditState::default(), InputEvent::Backspace);
        assert_eq!(state, TextEditState::default());
    }

    #[test]
    fn cursor_movement_clamps() {
        let state = TextEditState::seeded("ab");
        let state = apply_text(state, InputEvent::Right);
        assert_eq!(state.cursor, 2);
        let state = apply_text(state, InputEvent::Home);
        let state = apply_text(state, InputEvent::Left);
        assert_eq!(state.cursor, 0);
        let state = apply_text(state, InputEvent::End);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn multibyte_editing() {
        let state = TextEditState::seeded("héé");
        let state = apply_text(state, InputEvent::Backspace);
        assert_eq!(state.buffer, "hé");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn clear_to_start_and_end() {
        let state = TextEditState::seeded("hello world");
        let state = apply_text(state, InputEvent::Home);
        let state = apply_text(state, InputEvent::Right);
        let state = apply_text(state, InputEvent::ClearToEnd);
        assert_eq!(state.buffer, "h");

        let state = TextEditState::seeded("hello world");
        let state = apply_text(state, InputEvent::Left);
        let state = apply_text(state, InputEvent::ClearToStart);
        assert_eq!(state.buffer, "d");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn delete_word_removes_previous_word() {
        let state = TextEditState::seeded("hello big world  ");
        let state = apply_text(state, InputEvent::DeleteWord);
        assert_eq!(state.buffer, "hello big ");
        let state = apply_text(state, InputEvent::DeleteWord);
        assert_eq!(state.buffer, "hello ");
    }

    #[test]
    fn char_limit_blocks_extra_input() {
        let mut state = TextEditState::default();
        for c in "abcdef".chars() {
            state = match update_text(state, &InputEvent::Char(c), &plain_config(), Some(3)) {
                Transition::Continue(s) => s,
                other => panic!("Expected Continue, got {:?}", other),
            };
        }
        assert_eq!(state.buffer, "abc");
    }

    #[test]
    fn control_chars_are_ignored() {
        let state = apply_text(TextEditState::default(), InputEvent::Char('\u{7}'));
        assert!(state.is_empty());
    }

    // -- Confirm --

    #[test]
    fn confirm_enter_takes_default() {
        let state = ConfirmState { pending: true };
        assert_eq!(update_confirm(state, &InputEvent::Enter), Transition::Accept(true));
        let state = ConfirmState { pending: false };
        assert_eq!(update_confirm(state, &InputEvent::Enter), Transition::Accept(false));
    }

    #[test]
    fn confirm_explicit_keys_override_default() {
        let state = ConfirmState { pending: true };
        assert_eq!(update_confirm(state, &InputEvent::Char('n')), Transition::Accept(false));
        assert_eq!(update_confirm(state, &InputEvent::Char('N')), Transition::Accept(false));
        let state = ConfirmState { pending: false };
        assert_eq!(update_confirm(state, &InputEvent::Char('Y')), Transition::Accept(true));
    }

    #[test]
    fn confirm_ignores_other_keys() {
        let state = ConfirmState { pending: false };
        assert_eq!(
            update_confirm(state, &InputEvent::Char('x')),
            Transition::Continue(state)
        );
        assert_eq!(update_confirm(state, &InputEvent::Interrupt), Transition::Interrupt);
    }

    // -- Select --

    #[test]
    fn list_down_walks_to_last_without_wrapping() {
        let n = 5;
        let mut state = ListState::new(n, 7, 0).unwrap();
        for _ in 0..n {
            state = apply_list(state, InputEvent::Down);
        }
        assert_eq!(state.cursor, n - 1);
        let again = apply_list(state, InputEvent::Down);
        assert_eq!(again, state);
    }

    #[test]
    fn list_up_at_top_stays() {
        let state = ListState::new(3, 7, 0).unwrap();
        assert_eq!(apply_list(state, InputEvent::Char('k')), state);
    }

    #[test]
    fn list_window_follows_cursor() {
        let mut state = ListState::new(10, 3, 0).unwrap();
        for _ in 0..4 {
            state = apply_list(state, InputEvent::Char('j'));
        }
        assert_eq!(state.cursor, 4);
        assert_eq!(state.offset, 2);
        for _ in 0..3 {
            state = apply_list(state, InputEvent::Up);
        }
        assert_eq!(state.cursor, 1);
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn list_home_and_end() {
        let state = ListState::new(10, 3, 0).unwrap();
        let state = apply_list(state, InputEvent::End);
        assert_eq!((state.cursor, state.offset), (9, 7));
        let state = apply_list(state, InputEvent::Char('g'));
        assert_eq!((state.cursor, state.offset), (0, 0));
    }

    #[test]
    fn list_enter_accepts_cursor() {
        let state = ListState::new(4, 7, 2).unwrap();
        assert_eq!(update_list(state, &InputEvent::Enter), Transition::Accept(2));
        assert_eq!(update_list(state, &InputEvent::Interrupt), Transition::Interrupt);
    }

    proptest! {
        #[test]
        fn list_cursor_stays_in_bounds(
            n in 1usize..40,
            page in 1usize..10,
            moves in proptest::collection::vec(any::<bool>(), 0..100),
        ) {
            let mut state = ListState::new(n, page, 0).unwrap();
            for down in moves {
                let event = if down { InputEvent::Down } else { InputEvent::Up };
                state = match update_list(state, &event) {
                    Transition::Continue(s) => s,
                    other => panic!("Expected Continue, got {:?}", other),
                };
                prop_assert!(state.cursor < n);
                prop_assert!(state.offset <= state.cursor);
                prop_assert!(state.cursor < state.offset + state.page_size);
                prop_assert!(state.visible().contains(&state.cursor));
            }
        }
    }
}
