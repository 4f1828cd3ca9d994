//! Application state and core logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{error, info, warn};

use crate::api::AuthGateway;
use crate::state::{AppState, Form, Toast, View, BUTTON_SUBMIT};

/// What a key event on a form asks the app to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    None,
    Submit,
    SwitchForm,
    Back,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway to the remote authentication API, injected so submission
    /// logic is testable without a terminal or a network
    gateway: Box<dyn AuthGateway>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(gateway: Box<dyn AuthGateway>) -> Self {
        Self {
            state: AppState::default(),
            gateway,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-tick housekeeping
    pub fn tick(&mut self) {
        self.state.expire_toast();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Login => self.handle_login_key(key).await,
            View::Signup => self.handle_signup_key(key).await,
        }
        Ok(())
    }

    /// Handle keys on the landing view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.state.home_selected = self.state.home_selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Tab => {
                self.state.home_selected = (self.state.home_selected + 1).min(1);
            }
            KeyCode::Enter => {
                let view = if self.state.home_selected == 0 {
                    View::Login
                } else {
                    View::Signup
                };
                self.state.navigate(view);
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the Login view
    async fn handle_login_key(&mut self, key: KeyEvent) {
        match form_key_action(&mut self.state.login_form, key) {
            FormAction::Submit => self.submit_login().await,
            FormAction::SwitchForm => self.state.navigate(View::Signup),
            FormAction::Back => self.state.navigate(View::Home),
            FormAction::None => {}
        }
    }

    /// Handle keys in the Signup view
    async fn handle_signup_key(&mut self, key: KeyEvent) {
        match form_key_action(&mut self.state.signup_form, key) {
            FormAction::Submit => self.submit_signup().await,
            FormAction::SwitchForm => self.state.navigate(View::Login),
            FormAction::Back => self.state.navigate(View::Home),
            FormAction::None => {}
        }
    }

    /// Submit the login form: fresh validation pass first, one request to
    /// the gateway only when every field is clean.
    async fn submit_login(&mut self) {
        if self.state.submitting {
            return;
        }
        if !self.state.login_form.validate_all() {
            return;
        }

        let request = self.state.login_form.request();
        self.state.submitting = true;
        let result = self.gateway.login(&request).await;
        self.state.submitting = false;

        match result {
            Ok(outcome) if outcome.ok => {
                info!("user login successful");
                self.state.push_toast(Toast::success("Login Successful"));
            }
            Ok(outcome) => {
                // The server's message is logged but the user sees a fixed
                // text, matching the web client
                warn!(
                    message = outcome.message.as_deref().unwrap_or_default(),
                    "user login failed"
                );
                self.state.push_toast(Toast::failure(
                    "Uh Oh! Something went wrong",
                    "Login Failed, Check your credentials",
                ));
            }
            Err(err) => {
                error!(error = %err, "login request failed");
                self.state.push_toast(Toast::failure(
                    "Uh Oh! Something went wrong",
                    "Could not reach the server",
                ));
            }
        }
    }

    /// Submit the signup form
    async fn submit_signup(&mut self) {
        if self.state.submitting {
            return;
        }
        if !self.state.signup_form.validate_all() {
            return;
        }

        let request = self.state.signup_form.request();
        self.state.submitting = true;
        let result = self.gateway.register(&request).await;
        self.state.submitting = false;

        match result {
            Ok(outcome) if outcome.ok => {
                info!("account created");
                self.state
                    .push_toast(Toast::success("Account created successfully"));
            }
            Ok(outcome) => {
                // Unlike login, signup surfaces the server's message
                let description = outcome
                    .message
                    .unwrap_or_else(|| "Signup Failed, Please try again".to_string());
                warn!(message = %description, "signup failed");
                self.state
                    .push_toast(Toast::failure("Uh Oh! Something went wrong", description));
            }
            Err(err) => {
                error!(error = %err, "signup request failed");
                self.state.push_toast(Toast::failure(
                    "Uh Oh! Something went wrong",
                    "Could not reach the server",
                ));
            }
        }
    }
}

/// Shared key handling for both forms. Tab/arrows move focus, typing edits
/// the active field (re-validating it on every change), Enter submits from
/// any input field or activates the focused row.
fn form_key_action<F: Form>(form: &mut F, key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.next_element();
            FormAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_element();
            FormAction::None
        }
        KeyCode::Left => {
            if form.is_buttons_row_active() {
                form.prev_button();
            } else {
                form.cycle_active_choice(false);
            }
            FormAction::None
        }
        KeyCode::Right => {
            if form.is_buttons_row_active() {
                form.next_button();
            } else {
                form.cycle_active_choice(true);
            }
            FormAction::None
        }
        KeyCode::Char(' ') if form.is_checkbox_row_active() => {
            form.toggle_show_password();
            FormAction::None
        }
        KeyCode::Char(c) => {
            form.input_char(c);
            FormAction::None
        }
        KeyCode::Backspace => {
            form.backspace();
            FormAction::None
        }
        KeyCode::Enter => {
            if form.is_checkbox_row_active() {
                form.toggle_show_password();
                FormAction::None
            } else if form.is_buttons_row_active() {
                if form.selected_button() == BUTTON_SUBMIT {
                    FormAction::Submit
                } else {
                    FormAction::SwitchForm
                }
            } else {
                FormAction::Submit
            }
        }
        KeyCode::Esc => FormAction::Back,
        _ => FormAction::None,
    }
}
