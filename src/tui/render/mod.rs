pub mod help_overlay;
pub mod input_line;
pub mod list_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: filter line on top, then list, add line and status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // filter line
            Constraint::Min(1),    // item list
            Constraint::Length(1), // add line
            Constraint::Length(1), // status row
        ])
        .split(area);

    input_line::render_filter_line(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    input_line::render_add_line(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Push spans for `text`, styling the byte `ranges` with `highlight_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    ranges: &[Range<usize>],
    base_style: Style,
    highlight_style: Style,
) {
    let mut last_end = 0;
    for range in ranges {
        if range.start > last_end {
            spans.push(Span::styled(
                text[last_end..range.start].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[range.clone()].to_string(),
            highlight_style,
        ));
        last_end = range.end;
    }
    if last_end < text.len() || ranges.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_helpers::*;
    use crate::tui::app::Mode;
    use crate::tui::text_input::TextInput;
    use tempfile::TempDir;

    #[test]
    fn highlighted_spans_split_at_matches() {
        let base = Style::default();
        let hl = Style::default().bg(ratatui::style::Color::Red);
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "buy milk", &[4..8], base, hl);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["buy ", "milk"]);
        assert_eq!(spans[1].style, hl);

        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "plain", &[], base, hl);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn full_layout() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_in(&tmp, " - call the plumber\n x bought milk\n");
        let output = render_app(&mut app, 60, 8);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " /  Search...");
        assert_eq!(lines[1], " [ ] call the plumber");
        assert_eq!(lines[2], " [x] bought milk");
        // rows 1..=5 are the list, then the add line and the status row
        assert_eq!(lines[6], " +  Enter todo item...");
        assert!(lines[7].ends_with("1/2 done"));
    }

    #[test]
    fn filter_hides_rows() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_in(&tmp, " - call the plumber\n x bought milk\n");
        app.filter_input = TextInput::with_text("milk");
        app.mode = Mode::Filter;
        let output = render_app(&mut app, 60, 8);
        assert!(output.starts_with(" /  milk"));
        assert!(output.contains("1 match"));
        assert!(output.contains("[x] bought milk"));
        assert!(!output.contains("plumber"));
    }

    #[test]
    fn help_overlay_renders() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_in(&tmp, "");
        app.show_help = true;
        let output = render_app(&mut app, TERM_W, TERM_H);
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Toggle checked"));
    }
}
