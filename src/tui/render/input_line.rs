use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};
use crate::tui::text_input::TextInput;
use crate::util::unicode;

/// Width of the " /  " and " +  " prefixes
pub(super) const PREFIX_WIDTH: u16 = 4;

pub fn render_filter_line(frame: &mut Frame, app: &App, area: Rect) {
    let matches = if app.filter().is_active() {
        let n = app.visible().len();
        Some(if n == 1 {
            "1 match".to_string()
        } else {
            format!("{} matches", n)
        })
    } else {
        None
    };
    render_line(
        frame,
        app,
        area,
        LineSpec {
            symbol: "/",
            input: &app.filter_input,
            placeholder: "Search...",
            focused: app.mode == Mode::Filter,
            right: matches,
        },
    );
}

pub fn render_add_line(frame: &mut Frame, app: &App, area: Rect) {
    render_line(
        frame,
        app,
        area,
        LineSpec {
            symbol: "+",
            input: &app.add_input,
            placeholder: "Enter todo item...",
            focused: app.mode == Mode::Add,
            right: None,
        },
    );
}

struct LineSpec<'a> {
    symbol: &'a str,
    input: &'a TextInput,
    placeholder: &'a str,
    focused: bool,
    right: Option<String>,
}

fn render_line(frame: &mut Frame, app: &App, area: Rect, line: LineSpec) {
    let bg = app.theme.background;
    let symbol_color = if line.focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let mut spans = vec![Span::styled(
        format!(" {}  ", line.symbol),
        Style::default().fg(symbol_color).bg(bg),
    )];

    let right_width = line.right.as_deref().map_or(0, |r| unicode::display_width(r) + 1);
    let text_width = (area.width.saturating_sub(PREFIX_WIDTH) as usize).saturating_sub(right_width);

    let cursor_x = if line.input.is_empty() {
        spans.push(Span::styled(
            unicode::truncate_to_width(line.placeholder, text_width),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        0
    } else {
        let (shown, x) = scroll_window(line.input.text(), line.input.cursor_col(), text_width);
        spans.push(Span::styled(
            shown,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        x
    };

    if let Some(right) = line.right {
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let right_w = unicode::display_width(&right);
        let width = area.width as usize;
        if used + right_w < width {
            spans.push(Span::styled(" ".repeat(width - used - right_w), Style::default().bg(bg)));
            spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)), area);

    if line.focused {
        frame.set_cursor_position(Position::new(
            area.x + PREFIX_WIDTH + cursor_x as u16,
            area.y,
        ));
    }
}

/// Slice of `text` that fits in `width` cells with the cursor kept in view.
/// Returns the slice and the cursor's column within it.
pub(super) fn scroll_window(text: &str, cursor_col: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let skip = (cursor_col + 1).saturating_sub(width);
    let mut col = 0;
    let mut out = String::new();
    let mut out_width = 0;
    for g in text.graphemes(true) {
        let gw = unicode::display_width(g);
        if col >= skip {
            if out_width + gw > width {
                break;
            }
            out.push_str(g);
            out_width += gw;
        }
        col += gw;
    }
    (out, cursor_col.saturating_sub(skip).min(width.saturating_sub(1)))
}
