use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Up if shift => app.move_selected(-1),
        KeyCode::Down if shift => app.move_selected(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::PageDown => app.move_cursor(10),

        // Reorder (stands in for drag and drop)
        KeyCode::Char('K') => app.move_selected(-1),
        KeyCode::Char('J') => app.move_selected(1),

        // Item actions
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('s') => app.resort(),
        KeyCode::Char('C') => app.clear_checked(),
        KeyCode::Char('r') => app.reload(),

        // Focus the text lines
        KeyCode::Char('a') | KeyCode::Char('i') => app.mode = Mode::Add,
        KeyCode::Char('/') => app.mode = Mode::Filter,
        KeyCode::Esc if app.filter().is_active() => {
            app.filter_input.clear();
            app.refilter();
        }
        _ => {}
    }
}
