use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Key hints for each mode
fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "space toggle  e edit  d delete  J/K move  a add  / filter  ? help",
        Mode::Add => "Enter add  Esc list",
        Mode::Filter => "Enter list  Esc clear",
        Mode::Edit => "Enter save  Esc cancel  empty text deletes",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let done = app.store.items().iter().filter(|i| i.checked).count();
    let right = format!("{}/{} done", done, app.store.len());
    let right_width = unicode::display_width(&right);

    let (left, left_style) = if let Some(ref status) = app.status {
        (status.clone(), Style::default().fg(app.theme.text_bright).bg(bg))
    } else if let Some(err) = app.store.last_save_error() {
        (
            format!("not saved: {}", err),
            Style::default().fg(app.theme.red).bg(bg),
        )
    } else if app.show_key_hints {
        (hints(app.mode).to_string(), Style::default().fg(app.theme.dim).bg(bg))
    } else {
        (String::new(), Style::default().bg(bg))
    };

    let mut spans = Vec::new();
    let left = format!(" {}", left);
    let left_width = unicode::display_width(&left);

    if left_width + right_width + 1 <= width {
        spans.push(Span::styled(left, left_style));
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
    } else if app.status.is_some() || app.store.last_save_error().is_some() {
        // Messages win over the counter when space is short
        spans.push(Span::styled(
            unicode::truncate_to_width(&left, width),
            left_style,
        ));
    } else if right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use tempfile::TempDir;

    fn status_only(app: &App, w: u16) -> String {
        render_to_string(w, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn hints_and_counter() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp, " - a\n x b\n x c\n");
        let output = status_only(&app, TERM_W);
        assert!(output.starts_with(" space toggle"));
        assert!(output.ends_with("2/3 done"));
    }

    #[test]
    fn narrow_drops_hints() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp, " - a\n");
        assert_eq!(status_only(&app, 30).trim_start(), "0/1 done");
    }

    #[test]
    fn status_message_replaces_hints() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_in(&tmp, " - a\n");
        app.status = Some("deleted: b".into());
        let output = status_only(&app, TERM_W);
        assert!(output.starts_with(" deleted: b"));
    }
}
