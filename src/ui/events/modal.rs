use super::*;

pub(super) fn handle_notice_key(key: KeyEvent, state: &mut AppState) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        state.notice = None;
    }
}

/// Returns true when the user confirmed the quit
pub(super) fn handle_quit_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.quit_confirmation = None;
            false
        }
        _ => false,
    }
}
