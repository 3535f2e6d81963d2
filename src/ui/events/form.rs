use super::*;

pub(super) fn handle_form_key(key: KeyEvent, state: &mut AppState) {
    let form = &mut state.board.form;

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.set_focus(form.focus().next());
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.set_focus(form.focus().previous());
            return;
        }
        KeyCode::Esc => {
            form.set_focus(crate::ui::focus::FormFocus::Title);
            return;
        }
        KeyCode::Enter => {
            state.submit_form();
            return;
        }
        // Space presses the button when it has focus
        KeyCode::Char(' ') if !form.focus().is_text_input() => {
            state.submit_form();
            return;
        }
        _ => {}
    }

    // Remaining keys edit the focused text field
    let Some(field) = form.focused_field_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                field.insert(c);
            }
        }
        KeyCode::Backspace => {
            // Check for Ctrl+Backspace (delete word before cursor)
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                field.delete_word_back();
            } else {
                field.backspace();
            }
        }
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}
