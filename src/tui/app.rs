use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Config;
use crate::ops::filter::ItemFilter;
use crate::ops::reconcile::reconciled_index;
use crate::ops::store::ItemStore;

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Which line has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The item list
    Navigate,
    /// The add line at the bottom
    Add,
    /// The filter line at the top
    Filter,
    /// In-place edit of the selected item
    Edit,
}

/// Main application state
pub struct App {
    pub store: ItemStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor into the visible (filtered) rows
    pub cursor: usize,
    /// First visible row
    pub scroll: usize,
    pub add_input: TextInput,
    pub filter_input: TextInput,
    pub edit_input: TextInput,
    /// Store index of the item being edited
    pub edit_index: Option<usize>,
    pub filter_case_sensitive: bool,
    pub show_key_hints: bool,
    pub show_help: bool,
    /// One-shot message for the status row
    pub status: Option<String>,
}

impl App {
    pub fn new(store: ItemStore, config: &Config) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll: 0,
            add_input: TextInput::default(),
            filter_input: TextInput::default(),
            edit_input: TextInput::default(),
            edit_index: None,
            filter_case_sensitive: config.ui.filter_case_sensitive,
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            status: None,
        }
    }

    pub fn filter(&self) -> ItemFilter {
        ItemFilter::new(self.filter_input.text(), self.filter_case_sensitive)
    }

    /// Store indices of the rows currently shown
    pub fn visible(&self) -> Vec<usize> {
        self.filter().apply(self.store.items())
    }

    /// Store index under the cursor
    pub fn selected(&self) -> Option<usize> {
        self.visible().get(self.cursor).copied()
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Put the cursor on a store index if it is visible, otherwise just clamp.
    pub fn select_store_index(&mut self, index: usize) {
        if let Some(pos) = self.visible().iter().position(|&i| i == index) {
            self.cursor = pos;
        }
        self.clamp_cursor();
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Surface the store's last write failure, if any.
    fn after_mutation(&mut self) {
        if let Some(e) = self.store.last_save_error() {
            self.status = Some(format!("not saved: {}", e));
        }
    }

    // -----------------------------------------------------------------------
    // Actions: one store call each, then re-query for display
    // -----------------------------------------------------------------------

    /// Submit the add line. Empty text does nothing; the line is cleared.
    pub fn submit_add(&mut self) {
        let text = self.add_input.take();
        if self.store.add(&text) {
            self.select_store_index(0);
            self.after_mutation();
        }
    }

    pub fn toggle_selected(&mut self) {
        let Some(index) = self.selected() else {
            return;
        };
        if let Ok(landed) = self.store.toggle(index) {
            self.select_store_index(landed);
        }
        self.after_mutation();
    }

    pub fn begin_edit(&mut self) {
        let Some(index) = self.selected() else {
            return;
        };
        let Some(item) = self.store.get(index) else {
            return;
        };
        self.edit_input = TextInput::with_text(&item.text);
        self.edit_index = Some(index);
        self.mode = Mode::Edit;
    }

    /// Commit the in-place edit. Clearing the text deletes the item.
    pub fn commit_edit(&mut self) {
        self.mode = Mode::Navigate;
        let Some(index) = self.edit_index.take() else {
            return;
        };
        let text = self.edit_input.take();
        match self.store.set_text(index, &text) {
            Ok(Some(landed)) => self.select_store_index(landed),
            Ok(None) => self.clamp_cursor(),
            Err(e) => self.status = Some(e.to_string()),
        }
        self.after_mutation();
    }

    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Navigate;
        self.edit_index = None;
        self.edit_input.clear();
    }

    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected() else {
            return;
        };
        if let Ok(item) = self.store.remove(index) {
            self.status = Some(format!("deleted: {}", item.text));
        }
        self.clamp_cursor();
        self.after_mutation();
    }

    /// Swap the selected item past its visible neighbour (`delta` = -1 or 1).
    pub fn move_selected(&mut self, delta: isize) {
        let visible = self.visible();
        let Some(&from) = visible.get(self.cursor) else {
            return;
        };
        let Some(&to) = self
            .cursor
            .checked_add_signed(delta)
            .and_then(|pos| visible.get(pos))
        else {
            return;
        };
        if let Ok(landed) = self.store.move_item(from, to) {
            self.select_store_index(landed);
        }
        self.after_mutation();
    }

    pub fn resort(&mut self) {
        let landed = self.selected().map(|index| {
            reconciled_index(self.store.items(), index, self.store.settings().order)
        });
        self.store.resort();
        if let Some(index) = landed {
            self.select_store_index(index);
        }
        self.after_mutation();
    }

    pub fn clear_checked(&mut self) {
        let removed = self.store.clear_checked();
        self.status = Some(format!("removed {} checked item(s)", removed));
        self.clamp_cursor();
        self.after_mutation();
    }

    pub fn reload(&mut self) {
        self.store.reload();
        self.clamp_cursor();
        self.status = Some(format!("reloaded {}", self.store.path().display()));
    }

    /// Filter text changed: back to the first row.
    pub fn refilter(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }
}

/// Run the TUI application against the checklist at `path`.
pub fn run(path: PathBuf, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = ItemStore::open(path, config.store_settings());
    let mut app = App::new(store, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
