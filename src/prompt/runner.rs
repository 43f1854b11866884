//! Generic event loop driving one prompt from its initial state to a
//! terminal state.
//!
//! Follows the Elm/TEA split: a [`Machine`] describes init, update and
//! view as pure functions; [`drive`] is the only code that talks to the
//! session.

use ratatui::text::Text;
use tracing::{debug, trace};

use crate::error::PromptError;
use crate::session::Session;

use super::state::{InputEvent, Transition};

/// Pure description of one prompt kind's interaction.
pub trait Machine {
    type State;
    type Output;

    /// Short kind name for logs.
    fn kind(&self) -> &'static str;

    /// Fresh state for a new run.
    fn init(&self) -> Self::State;

    /// Apply one input event.
    fn update(&self, state: Self::State, event: &InputEvent) -> Transition<Self::State, Self::Output>;

    /// Frame for the current state.
    fn view(&self, state: &Self::State) -> Text<'static>;

    /// Frame left on screen once an answer is accepted.
    fn summary(&self, output: &Self::Output) -> Text<'static>;
}

/// Run `machine` against `session` until it accepts or is interrupted.
///
/// Render, block for an event, transition, repeat. Interrupt surfaces as
/// [`PromptError::Interrupted`], never as a value.
pub fn drive<M>(machine: &M, session: &mut dyn Session) -> Result<M::Output, PromptError>
where
    M: Machine + ?Sized,
{
    let kind = machine.kind();
    debug!(kind, "prompt started");

    let mut state = machine.init();
    session.draw(&machine.view(&state))?;

    loop {
        let event = session.next_event()?;
        trace!(kind, ?event, "input event");

        match machine.update(state, &event) {
            Transition::Continue(next) => {
                state = next;
                session.draw(&machine.view(&state))?;
            }
            Transition::Accept(output) => {
                session.draw(&machine.summary(&output))?;
                debug!(kind, "prompt accepted");
                return Ok(output);
            }
            Transition::Interrupt => {
                debug!(kind, "prompt interrupted");
                return Err(PromptError::Interrupted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ScriptedSession;

    /// Counts Char events; Enter accepts the count.
    struct Counter;

    impl Machine for Counter {
        type State = usize;
        type Output = usize;

        fn kind(&self) -> &'static str {
            "counter"
        }

        fn init(&self) -> usize {
            0
        }

        fn update(&self, state: usize, event: &InputEvent) -> Transition<usize, usize> {
            match event {
                InputEvent::Char(_) => Transition::Continue(state + 1),
                InputEvent::Enter => Transition::Accept(state),
                InputEvent::Interrupt => Transition::Interrupt,
                _ => Transition::Continue(state),
            }
        }

        fn view(&self, state: &usize) -> Text<'static> {
            Text::from(format!("count={state}"))
        }

        fn summary(&self, output: &usize) -> Text<'static> {
            Text::from(format!("done={output}"))
        }
    }

    #[test]
    fn renders_initial_then_every_transition() {
        let mut session = ScriptedSession::new([
            InputEvent::Char('a'),
            InputEvent::Char('b'),
            InputEvent::Enter,
        ]);
        let result = drive(&Counter, &mut session).unwrap();
        assert_eq!(result, 2);
        assert_eq!(session.frames(), ["count=0", "count=1", "count=2", "done=2"]);
    }

    #[test]
    fn interrupt_is_an_error() {
        let mut session = ScriptedSession::new([InputEvent::Char('a'), InputEvent::Interrupt]);
        let result = drive(&Counter, &mut session);
        assert!(matches!(result, Err(PromptError::Interrupted)));
    }

    #[test]
    fn stops_reading_after_terminal_state() {
        let mut session = ScriptedSession::new([InputEvent::Enter, InputEvent::Char('x')]);
        drive(&Counter, &mut session).unwrap();
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn session_failure_propagates() {
        let mut session = ScriptedSession::new([InputEvent::Char('a')]);
        let result = drive(&Counter, &mut session);
        assert!(matches!(result, Err(PromptError::Session(_))));
    }
}
