//! Landing view with links to the two forms

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_help_text;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the landing view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [column] = Layout::horizontal([Constraint::Max(40)])
        .flex(Flex::Center)
        .areas(area);
    let [content] = Layout::vertical([Constraint::Length(8)])
        .flex(Flex::Center)
        .areas(column);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // spacer
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // spacer
            Constraint::Length(1),             // Help
        ])
        .split(content);

    let title = Paragraph::new(Line::from(Span::styled(
        "Go to form",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(title, chunks[0]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_button(
        frame,
        buttons[0],
        "Login",
        app.state.home_selected == 0,
        true,
        None,
    );
    render_button(
        frame,
        buttons[1],
        "Sign Up",
        app.state.home_selected == 1,
        true,
        None,
    );

    draw_help_text(
        frame,
        chunks[4],
        &[
            ("←/→", "choose"),
            ("Enter", "open"),
            ("Esc", "quit"),
        ],
    );
}
