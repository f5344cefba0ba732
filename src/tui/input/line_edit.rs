use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::tui::text_input::TextInput;

/// Keys for the add line, the filter line and in-place edits
pub(super) fn handle_line_key(app: &mut App, key: KeyEvent) {
    match (app.mode, key.code) {
        (Mode::Add, KeyCode::Enter) => {
            app.submit_add();
            return;
        }
        (Mode::Add, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            return;
        }
        (Mode::Filter, KeyCode::Enter) | (Mode::Filter, KeyCode::Down) => {
            app.mode = Mode::Navigate;
            return;
        }
        (Mode::Filter, KeyCode::Esc) => {
            app.filter_input.clear();
            app.refilter();
            app.mode = Mode::Navigate;
            return;
        }
        (Mode::Edit, KeyCode::Enter) => {
            app.commit_edit();
            return;
        }
        (Mode::Edit, KeyCode::Esc) => {
            app.cancel_edit();
            return;
        }
        _ => {}
    }

    let mode = app.mode;
    let input = match mode {
        Mode::Add => &mut app.add_input,
        Mode::Filter => &mut app.filter_input,
        Mode::Edit => &mut app.edit_input,
        Mode::Navigate => return,
    };
    if edit_line(input, key) && mode == Mode::Filter {
        app.refilter();
    }
}

/// Apply a key to a text line. Returns true if the text changed.
fn edit_line(input: &mut TextInput, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word(),
        KeyCode::Char('u') if ctrl => input.delete_to_start(),
        KeyCode::Char('a') if ctrl => {
            input.move_home();
            return false;
        }
        KeyCode::Char('e') if ctrl => {
            input.move_end();
            return false;
        }
        KeyCode::Char(_) if ctrl => return false,
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.move_left();
            return false;
        }
        KeyCode::Right => {
            input.move_right();
            return false;
        }
        KeyCode::Home => {
            input.move_home();
            return false;
        }
        KeyCode::End => {
            input.move_end();
            return false;
        }
        _ => return false,
    }
    true
}
