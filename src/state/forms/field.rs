//! Form field value objects

/// Gender choice for the signup select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Next option in the select, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Other,
            Self::Other => Self::Male,
        }
    }

    /// Previous option in the select, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Male => Self::Other,
            Self::Female => Self::Male,
            Self::Other => Self::Female,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Number(u32),
    Choice(Option<Gender>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration, value, and the
/// outcome of its most recent validation
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    /// Render the value masked unless the reveal toggle is on
    pub is_secret: bool,
    /// Message from the last validation pass, if the field failed
    pub error: Option<&'static str>,
    /// True once the field has been validated and passed.
    /// Never true while `error` is set.
    pub valid: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            is_secret: false,
            error: None,
            valid: false,
        }
    }

    /// Create a new masked text field
    pub fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new numeric field
    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Number(0),
            is_secret: false,
            error: None,
            valid: false,
        }
    }

    /// Create a new choice field with no selection
    pub fn choice(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice(None),
            is_secret: false,
            error: None,
            valid: false,
        }
    }

    /// The value as text, as seen by the validator. Numbers render in
    /// decimal with zero as empty (an untouched age is "missing", not 0);
    /// an unselected choice is empty.
    pub fn as_text(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(0) => String::new(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Choice(Some(g)) => g.label().to_string(),
            FieldValue::Choice(None) => String::new(),
        }
    }

    /// Push a character to the field value. Numeric fields accept digits
    /// only; choice fields ignore typed input.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(n) => {
                if let Some(d) = c.to_digit(10) {
                    *n = n.saturating_mul(10).saturating_add(d);
                }
            }
            FieldValue::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number(n) => *n /= 10,
            FieldValue::Choice(_) => {}
        }
    }

    /// Cycle a choice field forward or backward; no-op for other kinds
    pub fn cycle_choice(&mut self, forward: bool) {
        if let FieldValue::Choice(choice) = &mut self.value {
            *choice = Some(match (&choice, forward) {
                (Some(g), true) => g.next(),
                (Some(g), false) => g.prev(),
                (None, _) => Gender::Male,
            });
        }
    }

    /// Record a validation outcome for this field, replacing any prior one
    pub fn set_validation(&mut self, error: Option<&'static str>) {
        self.valid = error.is_none();
        self.error = error;
    }

    /// Get the display value for rendering. Secret fields are masked
    /// unless `reveal` is set.
    pub fn display_value(&self, reveal: bool) -> String {
        let text = self.as_text();
        if self.is_secret && !reveal {
            "*".repeat(text.chars().count())
        } else {
            text
        }
    }
}
