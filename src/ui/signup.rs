//! Signup form rendering

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

/// Draw the signup form centered on the screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.signup_form;

    let [column] = Layout::horizontal([Constraint::Max(50)])
        .flex(Flex::Center)
        .areas(area);
    let [content] = Layout::vertical([Constraint::Length(32)])
        .flex(Flex::Center)
        .areas(column);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Full Name
            Constraint::Length(FIELD_HEIGHT),  // Age
            Constraint::Length(FIELD_HEIGHT),  // Gender
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm Password
            Constraint::Length(1),             // Show password checkbox
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Login link hint
            Constraint::Length(1),             // spacer
            Constraint::Length(1),             // Help
        ])
        .split(content);

    let title = Paragraph::new(Line::from(Span::styled(
        "Sign Up",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(title, chunks[0]);

    for i in 0..form.field_count() {
        if let Some(field) = form.get_field(i) {
            draw_field(
                frame,
                chunks[i + 1],
                field,
                form.active_element() == i,
                form.show_password,
            );
        }
    }

    draw_checkbox(
        frame,
        chunks[7],
        "Show Password",
        form.show_password,
        form.is_checkbox_row_active(),
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[8]);

    let buttons_active = form.is_buttons_row_active();
    let submit_label = if app.state.submitting {
        "Submitting..."
    } else {
        "Sign Up"
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
        "Go to Login",
        buttons_active && form.selected_button() == BUTTON_SWITCH,
        true,
        Some(Color::Blue),
    );

    let hint = Paragraph::new("Already have an account? Login")
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(hint, chunks[9]);

    draw_help_text(
        frame,
        chunks[11],
        &[
            ("Tab", "next field"),
            ("←/→", "select gender"),
            ("Enter", "submit"),
            ("Esc", "back"),
        ],
    );
}
