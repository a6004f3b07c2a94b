//! UI rendering

use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(crate) const TEXT_MIN_HEIGHT: u16 = 3;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(TEXT_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Buffer (line, column) under a terminal cell, if it is inside the text area.
pub(crate) fn text_position_at(
    app: &App,
    text_area: Rect,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<(usize, usize)> {
    let area = inner(text_area);
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let right = area.x.saturating_add(area.width);
    let bottom = area.y.saturating_add(area.height);
    if mouse_col < area.x || mouse_col >= right || mouse_row < area.y || mouse_row >= bottom {
        return None;
    }
    let row = app.scroll + (mouse_row - area.y) as usize;
    let col = (mouse_col - area.x) as usize;
    Some(app.line_col_at(row, col))
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let [text_area, status_area] = split_main_chunks(f.area());

    let text = inner(text_area);
    app.visible_lines = text.height.max(1) as usize;
    app.text_width = text.width.max(1) as usize;
    app.update_scroll();

    draw_text_area(f, app, text_area);
    draw_status_bar(f, app, status_area);
}

fn draw_text_area(f: &mut Frame, app: &App, area: Rect) {
    let buffer_lines: Vec<&str> = app.buffer().lines().collect();
    let lines: Vec<Line> = app
        .wrapped_rows()
        .into_iter()
        .skip(app.scroll)
        .take(app.visible_lines)
        .map(|(line, start)| {
            let row: String = buffer_lines[line]
                .chars()
                .skip(start)
                .take(app.text_width)
                .collect();
            Line::from(row)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" qwertype ");
    f.render_widget(Paragraph::new(lines).block(block), area);

    let text = inner(area);
    if text.width == 0 || text.height == 0 {
        return;
    }
    let (row, col) = app.caret_row_col();
    let row = row.saturating_sub(app.scroll) as u16;
    f.set_cursor_position((text.x + col as u16, text.y + row));
}

fn flag(label: &'static str, on: bool) -> Span<'static> {
    if on {
        Span::styled(
            label,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = app.input_state();
    let dim = Style::default().fg(Color::DarkGray);
    let spans = vec![
        flag("CAPS", state.caps_lock_on()),
        Span::raw(" "),
        flag("SHIFT", state.shift_on()),
        Span::styled(format!("  |  [{}]  |  ", app.stream.name()), dim),
        Span::styled(app.status_hint(), dim),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::KeyStream;
    use qwertype_core::TextBuffer;
    use ratatui::{Terminal, backend::TestBackend, layout::Position};

    #[test]
    fn text_position_outside_area_is_none() {
        let app = App::new(KeyStream::Raw, false);
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(text_position_at(&app, area, 0, 0), None);
        assert_eq!(text_position_at(&app, area, 19, 5), None);
        assert_eq!(text_position_at(&app, area, 5, 9), None);
        assert_eq!(text_position_at(&app, area, 1, 1), Some((0, 0)));
    }

    #[test]
    fn text_position_accounts_for_scroll() {
        let mut app = App::new(KeyStream::Raw, false);
        *app.buffer_mut() = TextBuffer::from_text("0\n1\n2\n3\n4\n5 abc\n6");
        app.scroll = 4;
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(text_position_at(&app, area, 3, 2), Some((5, 2)));
    }

    #[test]
    fn text_position_maps_wrapped_rows() {
        let mut app = App::new(KeyStream::Raw, false);
        *app.buffer_mut() = TextBuffer::from_text("abcdefghij");
        app.text_width = 4;
        let area = Rect::new(0, 0, 6, 10);
        assert_eq!(text_position_at(&app, area, 2, 2), Some((0, 5)));
        assert_eq!(text_position_at(&app, area, 1, 8), Some((0, 10)));
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16, width: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn draw_wraps_long_lines_and_follows_caret() {
        let mut app = App::new(KeyStream::Raw, false);
        *app.buffer_mut() = TextBuffer::from_text("abcdefghijklmnopqrstuvwxyz0123");
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert_eq!(app.text_width, 18);
        assert_eq!(row(&terminal, 1, 20), "│abcdefghijklmnopqr│");
        assert_eq!(row(&terminal, 2, 20), "│stuvwxyz0123      │");
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(13, 2));
    }

    #[test]
    fn draw_renders_text_and_flags() {
        let mut app = App::new(KeyStream::Resolved, false);
        app.buffer_mut().newline();
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let status = row(&terminal, 5, 60);
        assert!(status.starts_with("CAPS SHIFT"));
        assert!(status.contains("resolved chars"));
        assert_eq!(app.visible_lines, 3);
    }
}
