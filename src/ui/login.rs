//! Login form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_checkbox, draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, BUTTON_SUBMIT, BUTTON_SWITCH};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the login form centered on the screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login_form;

    let [column] = Layout::horizontal([Constraint::Max(50)])
        .flex(Flex::Center)
        .areas(area);
    let [content] = Layout::vertical([Constraint::Length(16)])
        .flex(Flex::Center)
        .areas(column);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Show password checkbox
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Signup link hint
            Constraint::Length(1),             // spacer
            Constraint::Length(1),             // Help
        ])
        .split(content);

    let title = Paragraph::new(Line::from(Span::styled(
        "Login",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(title, chunks[0]);

    draw_field(
        frame,
        chunks[1],
        &form.email,
        form.active_element() == 0,
        form.show_password,
    );
    draw_field(
        frame,
        chunks[2],
        &form.password,
        form.active_element() == 1,
        form.show_password,
    );

    draw_checkbox(
        frame,
        chunks[3],
        "Show Password",
        form.show_password,
        form.is_checkbox_row_active(),
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[4]);

    let buttons_active = form.is_buttons_row_active();
    let submit_label = if app.state.submitting {
        "Submitting..."
    } else {
        "Login"
    };
    render_button(
        frame,
        buttons[0],
        submit_label,
        buttons_active && form.selected_button() == BUTTON_SUBMIT,
        !app.state.submitting,
        Some(Color::Green),
    );
    render_button(
        frame,
        buttons[1],
        "Go to Sign Up",
        buttons_active && form.selected_button() == BUTTON_SWITCH,
        true,
        Some(Color::Blue),
    );

    let hint = Paragraph::new("Don't have an account? Sign Up")
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(hint, chunks[5]);

    draw_help_text(
        frame,
        chunks[7],
        &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("Esc", "back"),
        ],
    );
}
