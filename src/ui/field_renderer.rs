//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a field occupies: bordered input box plus one line for the error
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field: a bordered input box with the label as title and the
/// validation message (if any) on the line beneath it. Border color follows
/// the field's validation state, like the web form's input borders: red on
/// error, green once validated clean, gray otherwise; cyan marks focus.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, reveal: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = if field.error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else if field.valid {
        Color::Green
    } else {
        Color::DarkGray
    };

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value(reveal);
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = field.error {
        let error = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, chunks[1]);
    }
}

/// Draw the Show Password checkbox row
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let row = Paragraph::new(Line::from(Span::styled(format!("{mark} {label}"), style)));
    frame.render_widget(row, area);
}

/// Draw the key-binding help line shown under each form
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
