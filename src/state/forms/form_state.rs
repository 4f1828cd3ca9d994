//! Form state management and form structs

use super::field::{FieldValue, FormField};
use crate::api::{LoginRequest, SignupRequest};
use crate::validation::RuleSet;

/// Rows appended after the input fields: a Show Password checkbox and the
/// buttons row. The active-element cursor ranges over fields + these two.
const EXTRA_ROWS: usize = 2;

/// Which button is selected on the buttons row
pub const BUTTON_SUBMIT: usize = 0;
pub const BUTTON_SWITCH: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Trait for common form operations shared by the login and signup forms
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_element(&self) -> usize;
    fn set_active_element(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
    fn rules(&self) -> &RuleSet;
    fn show_password(&self) -> bool;
    fn toggle_show_password(&mut self);
    fn selected_button(&self) -> usize;
    fn set_selected_button(&mut self, index: usize);

    /// Total focusable elements: fields, checkbox row, buttons row
    fn element_count(&self) -> usize {
        self.field_count() + EXTRA_ROWS
    }

    /// Index of the Show Password checkbox row
    fn checkbox_index(&self) -> usize {
        self.field_count()
    }

    /// Index of the buttons row
    fn buttons_index(&self) -> usize {
        self.field_count() + 1
    }

    /// Returns true if the buttons row is currently active
    fn is_buttons_row_active(&self) -> bool {
        self.active_element() == self.buttons_index()
    }

    /// Returns true if the checkbox row is currently active
    fn is_checkbox_row_active(&self) -> bool {
        self.active_element() == self.checkbox_index()
    }

    fn next_element(&mut self) {
        let count = self.element_count();
        let current = self.active_element();
        self.set_active_element((current + 1) % count);
    }

    fn prev_element(&mut self) {
        let count = self.element_count();
        let current = self.active_element();
        if current == 0 {
            self.set_active_element(count - 1);
        } else {
            self.set_active_element(current - 1);
        }
    }

    /// Move to the next button (wraps around)
    fn next_button(&mut self) {
        self.set_selected_button((self.selected_button() + 1) % BUTTON_COUNT);
    }

    /// Move to the previous button (wraps around)
    fn prev_button(&mut self) {
        if self.selected_button() == 0 {
            self.set_selected_button(BUTTON_COUNT - 1);
        } else {
            self.set_selected_button(self.selected_button() - 1);
        }
    }

    /// Current values of every field, keyed by field name, in form order
    fn snapshot(&self) -> Vec<(&'static str, String)> {
        (0..self.field_count())
            .filter_map(|i| self.get_field(i))
            .map(|field| (field.name, field.as_text()))
            .collect()
    }

    /// Re-validate the field at `index` against the current values and
    /// replace its stored error with the fresh outcome. Called after every
    /// edit so errors never go stale.
    fn validate_field_at(&mut self, index: usize) {
        let Some(name) = self.get_field(index).map(|f| f.name) else {
            return;
        };
        let snapshot = self.snapshot();
        let error = self.rules().validate_field(name, snapshot.as_slice());
        if let Some(field) = self.get_field_mut(index) {
            field.set_validation(error);
        }
    }

    /// Re-validate every field from scratch, replacing the whole error
    /// state. Returns true when the form is clean and may be submitted.
    fn validate_all(&mut self) -> bool {
        let snapshot = self.snapshot();
        let errors = self.rules().validate_all(snapshot.as_slice());
        for i in 0..self.field_count() {
            let Some(name) = self.get_field(i).map(|f| f.name) else {
                continue;
            };
            let error = errors.get(name).copied();
            if let Some(field) = self.get_field_mut(i) {
                field.set_validation(error);
            }
        }
        errors.is_empty()
    }

    /// Type a character into the active field and re-validate it
    fn input_char(&mut self, c: char) {
        let index = self.active_element();
        if let Some(field) = self.get_field_mut(index) {
            field.push_char(c);
            self.validate_field_at(index);
        }
    }

    /// Backspace in the active field and re-validate it
    fn backspace(&mut self) {
        let index = self.active_element();
        if let Some(field) = self.get_field_mut(index) {
            field.pop_char();
            self.validate_field_at(index);
        }
    }

    /// Cycle the active field's choice value (gender select) and
    /// re-validate it; no-op for non-choice fields
    fn cycle_active_choice(&mut self, forward: bool) {
        let index = self.active_element();
        if let Some(field) = self.get_field_mut(index) {
            field.cycle_choice(forward);
            self.validate_field_at(index);
        }
    }
}

/// Login form: email and password
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_element_index: usize,
    pub selected_button: usize,
    pub show_password: bool,
    rules: RuleSet,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_element_index: 0,
            selected_button: BUTTON_SUBMIT,
            show_password: false,
            rules: RuleSet::login(),
        }
    }

    /// Request payload for the login endpoint
    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.as_text(),
            password: self.password.as_text(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_element(&self) -> usize {
        self.active_element_index
    }
    fn set_active_element(&mut self, index: usize) {
        self.active_element_index = index.min(self.buttons_index());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
    fn rules(&self) -> &RuleSet {
        &self.rules
    }
    fn show_password(&self) -> bool {
        self.show_password
    }
    fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(BUTTON_COUNT - 1);
    }
}

/// Signup form: email, full name, age, gender, password, confirm password
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub email: FormField,
    pub fullname: FormField,
    pub age: FormField,
    pub gender: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub active_element_index: usize,
    pub selected_button: usize,
    pub show_password: bool,
    rules: RuleSet,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            fullname: FormField::text("fullname", "Full Name"),
            age: FormField::number("age", "Age"),
            gender: FormField::choice("gender", "Gender"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::secret("confirmPassword", "Confirm Password"),
            active_element_index: 0,
            selected_button: BUTTON_SUBMIT,
            show_password: false,
            rules: RuleSet::signup(),
        }
    }

    /// Request payload for the registration endpoint
    pub fn request(&self) -> SignupRequest {
        let age = match self.age.value {
            FieldValue::Number(n) => n,
            _ => 0,
        };
        SignupRequest {
            email: self.email.as_text(),
            fullname: self.fullname.as_text(),
            age,
            gender: self.gender.as_text(),
            password: self.password.as_text(),
            confirm_password: self.confirm_password.as_text(),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        6
    }
    fn active_element(&self) -> usize {
        self.active_element_index
    }
    fn set_active_element(&mut self, index: usize) {
        self.active_element_index = index.min(self.buttons_index());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.fullname),
            2 => Some(&self.age),
            3 => Some(&self.gender),
            4 => Some(&self.password),
            5 => Some(&self.confirm_password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.fullname),
            2 => Some(&mut self.age),
            3 => Some(&mut self.gender),
            4 => Some(&mut self.password),
            5 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn rules(&self) -> &RuleSet {
        &self.rules
    }
    fn show_password(&self) -> bool {
        self.show_password
    }
    fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(BUTTON_COUNT - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_into<F: Form>(form: &mut F, index: usize, text: &str) {
        form.set_active_element(index);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    mod login_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn new_has_correct_defaults() {
            let form = LoginForm::new();
            assert_eq!(form.active_element_index, 0);
            assert_eq!(form.selected_button, BUTTON_SUBMIT);
            assert!(!form.show_password);
            assert_eq!(form.email.name, "email");
            assert_eq!(form.password.name, "password");
            assert!(form.password.is_secret);
        }

        #[test]
        fn element_cursor_covers_fields_checkbox_and_buttons() {
            let form = LoginForm::new();
            assert_eq!(form.element_count(), 4);
            assert_eq!(form.checkbox_index(), 2);
            assert_eq!(form.buttons_index(), 3);
        }

        #[test]
        fn next_element_cycles() {
            let mut form = LoginForm::new();
            for _ in 0..4 {
                form.next_element();
            }
            assert_eq!(form.active_element_index, 0);
        }

        #[test]
        fn prev_element_wraps_to_buttons_row() {
            let mut form = LoginForm::new();
            form.prev_element();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn typing_validates_the_changed_field() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "nope");
            assert_eq!(form.email.error, Some("Enter a valid email format"));
            assert!(!form.email.valid);

            form.input_char('@');
            assert_eq!(form.email.error, None);
            assert!(form.email.valid);
        }

        #[test]
        fn backspace_revalidates() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "a@");
            assert!(form.email.valid);

            form.backspace();
            assert_eq!(form.email.error, Some("Enter a valid email format"));
        }

        #[test]
        fn validate_all_flags_empty_fields() {
            let mut form = LoginForm::new();
            assert!(!form.validate_all());
            assert_eq!(form.email.error, Some("Email is required"));
            assert_eq!(form.password.error, Some("Password is required"));
        }

        #[test]
        fn validate_all_passes_clean_form() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "a@b.com");
            type_into(&mut form, 1, "Abcdef1!");
            assert!(form.validate_all());
            assert!(form.email.valid);
            assert!(form.password.valid);
        }

        #[test]
        fn request_carries_field_values() {
            let mut form = LoginForm::new();
            type_into(&mut form, 0, "a@b.com");
            type_into(&mut form, 1, "Abcdef1!");
            let request = form.request();
            assert_eq!(request.email, "a@b.com");
            assert_eq!(request.password, "Abcdef1!");
        }

        #[test]
        fn show_password_toggle_does_not_affect_validation() {
            let mut form = LoginForm::new();
            type_into(&mut form, 1, "Abcdef1!");
            form.toggle_show_password();
            assert!(form.show_password());
            assert!(form.password.valid);
            assert_eq!(form.password.display_value(form.show_password), "Abcdef1!");
        }

        #[test]
        fn button_selection_wraps() {
            let mut form = LoginForm::new();
            form.next_button();
            assert_eq!(form.selected_button, BUTTON_SWITCH);
            form.next_button();
            assert_eq!(form.selected_button, BUTTON_SUBMIT);
            form.prev_button();
            assert_eq!(form.selected_button, BUTTON_SWITCH);
        }
    }

    mod signup_form {
        use super::*;
        use pretty_assertions::assert_eq;

        fn filled_form() -> SignupForm {
            let mut form = SignupForm::new();
            type_into(&mut form, 0, "a@b.com");
            type_into(&mut form, 1, "Ada Lovelace");
            type_into(&mut form, 2, "30");
            form.set_active_element(3);
            form.cycle_active_choice(true);
            type_into(&mut form, 4, "Abcdef1!");
            type_into(&mut form, 5, "Abcdef1!");
            form
        }

        #[test]
        fn new_has_six_fields() {
            let form = SignupForm::new();
            assert_eq!(form.field_count(), 6);
            assert_eq!(form.element_count(), 8);
            assert_eq!(form.get_field(0).unwrap().name, "email");
            assert_eq!(form.get_field(1).unwrap().name, "fullname");
            assert_eq!(form.get_field(2).unwrap().name, "age");
            assert_eq!(form.get_field(3).unwrap().name, "gender");
            assert_eq!(form.get_field(4).unwrap().name, "password");
            assert_eq!(form.get_field(5).unwrap().name, "confirmPassword");
            assert!(form.get_field(6).is_none());
        }

        #[test]
        fn validate_all_passes_filled_form() {
            let mut form = filled_form();
            assert!(form.validate_all());
        }

        #[test]
        fn validate_all_collects_every_error_without_network_state() {
            let mut form = SignupForm::new();
            type_into(&mut form, 1, "A");
            type_into(&mut form, 2, "17");
            type_into(&mut form, 4, "weak");
            type_into(&mut form, 5, "mismatch");

            assert!(!form.validate_all());
            assert_eq!(form.email.error, Some("Email is required"));
            assert_eq!(form.fullname.error, Some("Full name too short"));
            assert_eq!(form.age.error, Some("Age must be between 18 and 100"));
            assert_eq!(form.gender.error, Some("Gender is required"));
            assert_eq!(form.password.error, Some("Password too short"));
            assert_eq!(form.confirm_password.error, Some("Passwords do not match"));
        }

        #[test]
        fn editing_password_leaves_stale_confirm_error_until_revalidated() {
            // Confirm is validated against whatever the password holds at
            // evaluation time; a later password edit re-checks only the
            // password field, and a full submit pass catches the mismatch.
            let mut form = SignupForm::new();
            type_into(&mut form, 4, "Abcdef1!");
            type_into(&mut form, 5, "Abcdef1!");
            assert!(form.confirm_password.valid);

            type_into(&mut form, 4, "9");
            assert!(form.confirm_password.valid);
            assert!(!form.validate_all());
            assert_eq!(form.confirm_password.error, Some("Passwords do not match"));
        }

        #[test]
        fn gender_select_validates_on_choice() {
            let mut form = SignupForm::new();
            form.set_active_element(3);
            form.cycle_active_choice(true);
            assert!(form.gender.valid);
            assert_eq!(form.gender.as_text(), "Male");
        }

        #[test]
        fn banned_word_password_is_rejected_on_input() {
            let mut form = SignupForm::new();
            type_into(&mut form, 4, "Password1!");
            assert_eq!(
                form.password.error,
                Some("Password cannot contain organizational words")
            );
        }

        #[test]
        fn request_serializes_confirm_field_in_camel_case() {
            let form = filled_form();
            let request = form.request();
            assert_eq!(request.age, 30);
            assert_eq!(request.gender, "Male");
            let json = serde_json::to_value(&request).unwrap();
            assert_eq!(json["confirmPassword"], "Abcdef1!");
            assert_eq!(json["fullname"], "Ada Lovelace");
        }
    }
}
