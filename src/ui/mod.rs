//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod home;
mod login;
mod signup;
mod toast;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Home => home::draw(frame, area, app),
        View::Login => login::draw(frame, area, app),
        View::Signup => signup::draw(frame, area, app),
    }

    // Toast overlays whatever view is active
    toast::draw(frame, app);
}
