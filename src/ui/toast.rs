//! Transient toast notification overlay

use crate::app::App;
use crate::state::{Toast, ToastVariant};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 5;

/// Draw the active toast, if any, in the bottom-right corner
pub fn draw(frame: &mut Frame, app: &App) {
    let Some(toast) = &app.state.toast else {
        return;
    };

    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    let toast_area = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(height + 1),
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);
    frame.render_widget(toast_widget(toast), toast_area);
}

fn toast_widget(toast: &Toast) -> Paragraph<'_> {
    let border_color = match toast.variant {
        ToastVariant::Default => Color::Green,
        ToastVariant::Destructive => Color::Red,
    };

    let mut lines = Vec::new();
    if let Some(title) = &toast.title {
        lines.push(Line::from(Span::styled(
            title.as_str(),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(toast.description.as_str()));

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    )
}
