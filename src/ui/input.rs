use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::home::{self, ControlOutcome};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::F(5) {
        app.request_fetch();
        return;
    }

    let fetcher = app.fetcher();
    let mut retry = || fetcher.request_fetch();
    match home::handle_key(app.view_state(), key, &mut retry) {
        ControlOutcome::Retried => {
            tracing::info!("Retry requested from {:?}", app.view_state().branch());
            return;
        }
        ControlOutcome::ItemActivated => {
            tracing::debug!(
                selected = app.list_state().selected,
                "Card chevron activated; no action bound"
            );
            return;
        }
        ControlOutcome::Ignored => {}
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
