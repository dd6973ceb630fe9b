//! Activation of the retry control.

mod common;

use common::items;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unibrowse::ui::home::{handle_key, ControlOutcome};
use unibrowse::ui::screen::ViewState;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn enter_on_error_runs_retry_once() {
    for state in [ViewState::Error, ViewState::ErrorIo] {
        let mut calls = 0;
        let outcome = handle_key(&state, press(KeyCode::Enter), &mut || calls += 1);
        assert_eq!(outcome, ControlOutcome::Retried);
        assert_eq!(calls, 1);
    }
}

#[test]
fn each_activation_runs_retry_again() {
    let mut calls = 0;
    let mut retry = || calls += 1;
    handle_key(&ViewState::Error, press(KeyCode::Enter), &mut retry);
    handle_key(&ViewState::Error, press(KeyCode::Char('r')), &mut retry);
    assert_eq!(calls, 2);
}

#[test]
fn loading_and_success_never_retry() {
    let states = [
        ViewState::Loading,
        ViewState::Success(Vec::new()),
        ViewState::Success(items(&["Alpha"])),
    ];
    for state in states {
        let mut calls = 0;
        handle_key(&state, press(KeyCode::Enter), &mut || calls += 1);
        handle_key(&state, press(KeyCode::Char('r')), &mut || calls += 1);
        assert_eq!(calls, 0, "state {:?}", state.branch());
    }
}

#[test]
fn other_keys_do_not_retry() {
    let mut calls = 0;
    let outcome = handle_key(&ViewState::ErrorIo, press(KeyCode::Char('x')), &mut || calls += 1);
    assert_eq!(outcome, ControlOutcome::Ignored);
    assert_eq!(calls, 0);
}

#[test]
fn key_release_is_ignored() {
    let mut calls = 0;
    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    let outcome = handle_key(&ViewState::Error, release, &mut || calls += 1);
    assert_eq!(outcome, ControlOutcome::Ignored);
    assert_eq!(calls, 0);
}

#[test]
fn enter_on_card_is_a_placeholder() {
    let mut calls = 0;
    let state = ViewState::Success(items(&["Alpha"]));
    let outcome = handle_key(&state, press(KeyCode::Enter), &mut || calls += 1);
    assert_eq!(outcome, ControlOutcome::ItemActivated);
    assert_eq!(calls, 0);
}
