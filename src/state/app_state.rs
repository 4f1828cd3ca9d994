//! Application state definitions

use std::time::{Duration, Instant};

use super::forms::{LoginForm, SignupForm};

/// How long a toast stays on screen
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing view with links to the two forms
    #[default]
    Home,
    Login,
    Signup,
}

/// Toast variant, mirroring the notification styles of the web client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient notification message
#[derive(Debug, Clone)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: Option<String>,
    pub description: String,
    shown_at: Instant,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Default,
            title: None,
            description: description.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            title: Some(title.into()),
            description: description.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_TTL
    }
}

/// Top-level application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Which home button is selected (0 = Login, 1 = Sign Up)
    pub home_selected: usize,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    /// Latest toast, if still visible. A new toast replaces the old one.
    pub toast: Option<Toast>,
    /// True while a submit request is in flight; blocks a second submit
    pub submitting: bool,
}

impl AppState {
    /// Show a toast, replacing any currently visible one
    pub fn push_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Drop the toast once its display time has passed.
    /// Called every event-loop tick.
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Enter a view. Forms are created fresh on entry and whatever the
    /// previous visit held is discarded, matching the per-mount lifecycle
    /// of the web forms.
    pub fn navigate(&mut self, view: View) {
        match view {
            View::Login => self.login_form = LoginForm::new(),
            View::Signup => self.signup_form = SignupForm::new(),
            View::Home => {}
        }
        self.current_view = view;
    }
}
