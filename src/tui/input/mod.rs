mod line_edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use line_edit::handle_line_key;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Quit works from every line
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.should_quit = true;
        return;
    }

    app.status = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add | Mode::Filter | Mode::Edit => handle_line_key(app, key),
    }
}

/// Handle a bracketed paste event. Only the text lines accept pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Navigate => {}
        Mode::Add => app.add_input.insert_str(text),
        Mode::Edit => app.edit_input.insert_str(text),
        Mode::Filter => {
            app.filter_input.insert_str(text);
            app.refilter();
        }
    }
}
