use std::fs;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::{Config, Item};
use crate::ops::store::ItemStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole app screen.
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _| super::render(frame, app))
}

/// An App over `todo.txt` in `tmp`, seeded with `content`.
pub fn app_in(tmp: &TempDir, content: &str) -> App {
    let path = tmp.path().join("todo.txt");
    fs::write(&path, content).unwrap();
    let config = Config::default();
    App::new(ItemStore::open(path, config.store_settings()), &config)
}

/// An App over `items` exactly as given (no load, no reconcile).
pub fn app_with_items(tmp: &TempDir, items: Vec<Item>) -> App {
    let config = Config::default();
    let store = ItemStore::with_items(tmp.path().join("todo.txt"), config.store_settings(), items);
    App::new(store, &config)
}
