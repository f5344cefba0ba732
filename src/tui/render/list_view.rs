use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::checkbox;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::input_line::scroll_window;
use super::push_highlighted_spans;

/// Width of the " [ ] " row prefix
const ROW_PREFIX_WIDTH: u16 = 5;

/// Render the item list (the rows that pass the filter)
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let filter = app.filter();
    let visible = filter.apply(app.store.items());

    if visible.is_empty() {
        let message = if app.store.is_empty() {
            " No items yet. Press a to add one.".to_string()
        } else {
            format!(" No items match \"{}\"", filter.query())
        };
        let empty = Paragraph::new(unicode::truncate_to_width(&message, area.width as usize))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    app.cursor = app.cursor.min(visible.len() - 1);
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll + height {
        app.scroll = app.cursor + 1 - height;
    }

    let text_width = area.width.saturating_sub(ROW_PREFIX_WIDTH) as usize;
    let editing = app.mode == Mode::Edit;
    let mut cursor_pos = None;

    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(row, &index)| {
            let item = &app.store.items()[index];
            let is_cursor = row == app.cursor;
            let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

            let mut spans = vec![
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(
                    checkbox(item.checked),
                    Style::default()
                        .fg(app.theme.checkbox_color(item.checked))
                        .bg(row_bg),
                ),
                Span::styled(" ", Style::default().bg(row_bg)),
            ];

            if is_cursor && editing {
                let (shown, x) =
                    scroll_window(app.edit_input.text(), app.edit_input.cursor_col(), text_width);
                spans.push(Span::styled(
                    shown,
                    Style::default().fg(app.theme.text_bright).bg(row_bg),
                ));
                cursor_pos = Some(Position::new(
                    area.x + ROW_PREFIX_WIDTH + x as u16,
                    area.y + (row - app.scroll) as u16,
                ));
            } else {
                let mut text_style = if item.checked {
                    Style::default()
                        .fg(app.theme.checked)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(app.theme.text)
                };
                if is_cursor {
                    text_style = text_style.fg(app.theme.text_bright).add_modifier(Modifier::BOLD);
                }
                let text = unicode::truncate_to_width(&item.text, text_width);
                let ranges = filter.match_ranges(&text);
                push_highlighted_spans(
                    &mut spans,
                    &text,
                    &ranges,
                    text_style.bg(row_bg),
                    Style::default()
                        .fg(app.theme.search_match_fg)
                        .bg(app.theme.search_match_bg),
                );
            }

            // Pad the cursor row so the selection spans the full width
            if is_cursor {
                let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
                let w = area.width as usize;
                if used < w {
                    spans.push(Span::styled(" ".repeat(w - used), Style::default().bg(row_bg)));
                }
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}
