use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::ui::screen::ViewState;

/// The action behind the retry control.
///
/// Borrowed for a single [`handle_key`] call and never stored. Any
/// `FnMut()` qualifies.
pub trait RetryAction {
    fn retry(&mut self);
}

impl<F: FnMut()> RetryAction for F {
    fn retry(&mut self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    /// The retry control was activated and the action ran once.
    Retried,
    /// A card's chevron was activated. It has no action yet.
    ItemActivated,
    Ignored,
}

/// Activates the control under the key, if the current state has one.
///
/// `Enter` or `r` on an error screen runs `retry` exactly once. `Enter`
/// on a non-empty list hits the card chevron, which does nothing.
pub fn handle_key(state: &ViewState, key: KeyEvent, retry: &mut dyn RetryAction) -> ControlOutcome {
    if key.kind != KeyEventKind::Press {
        return ControlOutcome::Ignored;
    }

    let activates = matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')
    );
    if !activates {
        return ControlOutcome::Ignored;
    }

    match state {
        ViewState::Error | ViewState::ErrorIo => {
            retry.retry();
            ControlOutcome::Retried
        }
        ViewState::Success(items) if key.code == KeyCode::Enter && !items.is_empty() => {
            ControlOutcome::ItemActivated
        }
        ViewState::Success(_) | ViewState::Loading => ControlOutcome::Ignored,
    }
}
