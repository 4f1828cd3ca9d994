//! Field validation rule engine
//!
//! Both forms share one pure, stateless engine: a [`RuleSet`] is an ordered
//! table mapping each field name to an ordered list of checks, each paired
//! with the message reported when it fails. Evaluating a field returns the
//! first failing message or `None`; callers replace their stored error for
//! that field with the result, so stale errors clear in the same pass.

use std::collections::BTreeMap;

/// Substrings rejected in signup passwords regardless of the character
/// pattern. Matching is case-sensitive.
pub const BANNED_WORDS: [&str; 4] = ["gcit", "vle", "gyalpozhing", "password"];

/// Symbols accepted by the password pattern.
const PASSWORD_SYMBOLS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];

/// A single predicate applied to a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Value must not be empty
    NotEmpty,
    /// Value must contain an `@` character
    ContainsAt,
    /// Value must not contain any of [`BANNED_WORDS`]
    FreeOfBannedWords,
    /// Value must have at least this many characters
    MinLen(usize),
    /// Value must satisfy the password character pattern
    PasswordPattern,
    /// Value may only contain ASCII letters and whitespace
    LettersAndSpaces,
    /// Numeric value must be greater than 18 and at most 100
    AgeInRange,
    /// Value must equal the named sibling field's value
    MatchesField(&'static str),
}

/// A check paired with the message shown when it fails
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Read access to the current field values of a form, keyed by field name.
/// Cross-field checks (confirm password) look siblings up through this.
pub trait FieldSource {
    /// Current value of the named field, empty string if unknown
    fn value_of(&self, name: &str) -> &str;
}

impl FieldSource for [(&'static str, String)] {
    fn value_of(&self, name: &str) -> &str {
        self.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

/// Ordered validation rule table for one form
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(&'static str, Vec<FieldRule>)>,
}

impl RuleSet {
    /// Rules for the login form
    pub fn login() -> Self {
        Self {
            rules: vec![
                (
                    "email",
                    vec![
                        FieldRule::new(Check::NotEmpty, "Email is required"),
                        FieldRule::new(Check::ContainsAt, "Enter a valid email format"),
                    ],
                ),
                (
                    "password",
                    vec![
                        FieldRule::new(Check::NotEmpty, "Password is required"),
                        FieldRule::new(
                            Check::PasswordPattern,
                            "Password must contain uppercase, lowercase, number, and special character",
                        ),
                    ],
                ),
            ],
        }
    }

    /// Rules for the signup form
    pub fn signup() -> Self {
        Self {
            rules: vec![
                (
                    "email",
                    vec![
                        FieldRule::new(Check::NotEmpty, "Email is required"),
                        FieldRule::new(Check::ContainsAt, "Email is invalid"),
                    ],
                ),
                (
                    "fullname",
                    vec![
                        FieldRule::new(Check::NotEmpty, "Full Name is required"),
                        FieldRule::new(
                            Check::LettersAndSpaces,
                            "Name can only contain letters and spaces",
                        ),
                        FieldRule::new(Check::MinLen(2), "Full name too short"),
                    ],
                ),
                (
                    "age",
                    vec![
                        FieldRule::new(Check::NotEmpty, "Age is required"),
                        FieldRule::new(Check::AgeInRange, "Age must be between 18 and 100"),
                    ],
                ),
                (
                    "gender",
                    vec![FieldRule::new(Check::NotEmpty, "Gender is required")],
                ),
                (
                    "password",
                    vec![
                        FieldRule::new(Check::NotEmpty, "Password is required"),
                        FieldRule::new(
                            Check::FreeOfBannedWords,
                            "Password cannot contain organizational words",
                        ),
                        FieldRule::new(Check::MinLen(6), "Password too short"),
                        FieldRule::new(
                            Check::PasswordPattern,
                            "Password must contain uppercase, lowercase, number, and special character",
                        ),
                    ],
                ),
                (
                    "confirmPassword",
                    vec![
                        FieldRule::new(Check::NotEmpty, "Confirm password is required"),
                        FieldRule::new(
                            Check::MatchesField("password"),
                            "Passwords do not match",
                        ),
                    ],
                ),
            ],
        }
    }

    /// Validate one field against the current form values.
    /// Returns the first failing rule's message, or `None` if the field
    /// passes every rule (including when the field has no rules at all).
    pub fn validate_field<F: FieldSource + ?Sized>(
        &self,
        name: &str,
        fields: &F,
    ) -> Option<&'static str> {
        let rules = self
            .rules
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, rules)| rules)?;

        let value = fields.value_of(name);
        rules
            .iter()
            .find(|rule| !passes(rule.check, value, fields))
            .map(|rule| rule.message)
    }

    /// Re-validate every field and return a fresh, complete error map.
    /// An empty map means the form is clean.
    pub fn validate_all<F: FieldSource + ?Sized>(
        &self,
        fields: &F,
    ) -> BTreeMap<&'static str, &'static str> {
        self.rules
            .iter()
            .filter_map(|(name, _)| {
                self.validate_field(name, fields).map(|msg| (*name, msg))
            })
            .collect()
    }
}

/// Evaluate a single check; `true` means the value passes
fn passes<F: FieldSource + ?Sized>(check: Check, value: &str, fields: &F) -> bool {
    match check {
        Check::NotEmpty => !value.is_empty(),
        Check::ContainsAt => value.contains('@'),
        Check::FreeOfBannedWords => !BANNED_WORDS.iter().any(|word| value.contains(word)),
        Check::MinLen(min) => value.chars().count() >= min,
        Check::PasswordPattern => password_pattern(value),
        Check::LettersAndSpaces => value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace()),
        Check::AgeInRange => value
            .parse::<i64>()
            .is_ok_and(|age| age > 18 && age <= 100),
        Check::MatchesField(other) => value == fields.value_of(other),
    }
}

/// Password character pattern: at least 6 characters, one lowercase letter,
/// one uppercase letter, one digit, one symbol from `@$!%*?&`, and nothing
/// outside those classes.
fn password_pattern(value: &str) -> bool {
    let is_symbol = |c: char| PASSWORD_SYMBOLS.contains(&c);
    let is_allowed = |c: char| c.is_ascii_alphanumeric() || is_symbol(c);

    value.chars().count() >= 6
        && value.chars().all(is_allowed)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(is_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(n, v)| (*n, v.to_string())).collect()
    }

    mod password_pattern {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn accepts_password_with_all_classes() {
            assert!(password_pattern("Abcde1!"));
            assert!(password_pattern("xY3@xy"));
        }

        #[test]
        fn rejects_too_short() {
            assert!(!password_pattern("aB1!x"));
        }

        #[test]
        fn rejects_missing_lowercase() {
            assert!(!password_pattern("ABCDE1!"));
        }

        #[test]
        fn rejects_missing_uppercase() {
            assert!(!password_pattern("abcde1!"));
        }

        #[test]
        fn rejects_missing_digit() {
            assert!(!password_pattern("Abcdef!"));
        }

        #[test]
        fn rejects_missing_symbol() {
            assert!(!password_pattern("Abcdef1"));
        }

        #[test]
        fn rejects_characters_outside_allowed_set() {
            // '#' is not in the allowed symbol set
            assert!(!password_pattern("Abcde1#!"));
            // spaces are not allowed either
            assert!(!password_pattern("Abcd e1!"));
        }

        #[test]
        fn exactly_six_characters_is_enough() {
            assert!(password_pattern("Abcd1!"));
        }
    }

    mod login_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn empty_email_is_required() {
            let rules = RuleSet::login();
            let f = fields(&[("email", ""), ("password", "Abcdef1!")]);
            assert_eq!(
                rules.validate_field("email", f.as_slice()),
                Some("Email is required")
            );
        }

        #[test]
        fn email_without_at_sign_uses_login_message() {
            let rules = RuleSet::login();
            let f = fields(&[("email", "not-an-email"), ("password", "")]);
            assert_eq!(
                rules.validate_field("email", f.as_slice()),
                Some("Enter a valid email format")
            );
        }

        #[test]
        fn email_with_at_sign_passes() {
            let rules = RuleSet::login();
            let f = fields(&[("email", "a@b.com"), ("password", "")]);
            assert_eq!(rules.validate_field("email", f.as_slice()), None);
        }

        #[test]
        fn empty_password_is_required() {
            let rules = RuleSet::login();
            let f = fields(&[("email", "a@b.com"), ("password", "")]);
            assert_eq!(
                rules.validate_field("password", f.as_slice()),
                Some("Password is required")
            );
        }

        #[test]
        fn weak_password_reports_pattern_message() {
            let rules = RuleSet::login();
            let f = fields(&[("email", "a@b.com"), ("password", "weak")]);
            assert_eq!(
                rules.validate_field("password", f.as_slice()),
                Some("Password must contain uppercase, lowercase, number, and special character")
            );
        }

        #[test]
        fn login_does_not_apply_banned_words() {
            // "Password1!" matches the pattern; login has no banned-word rule
            let rules = RuleSet::login();
            let f = fields(&[("email", "a@b.com"), ("password", "Password1!")]);
            assert_eq!(rules.validate_field("password", f.as_slice()), None);
        }

        #[test]
        fn clean_form_produces_empty_error_map() {
            let rules = RuleSet::login();
            let f = fields(&[("email", "a@b.com"), ("password", "Abcdef1!")]);
            assert!(rules.validate_all(f.as_slice()).is_empty());
        }
    }

    mod signup_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        fn valid_signup() -> Vec<(&'static str, String)> {
            fields(&[
                ("email", "a@b.com"),
                ("fullname", "Ada Lovelace"),
                ("age", "30"),
                ("gender", "Female"),
                ("password", "Abcdef1!"),
                ("confirmPassword", "Abcdef1!"),
            ])
        }

        #[test]
        fn every_empty_field_reports_its_required_message() {
            let rules = RuleSet::signup();
            let f = fields(&[
                ("email", ""),
                ("fullname", ""),
                ("age", ""),
                ("gender", ""),
                ("password", ""),
                ("confirmPassword", ""),
            ]);
            let errors = rules.validate_all(f.as_slice());
            assert_eq!(errors.get("email"), Some(&"Email is required"));
            assert_eq!(errors.get("fullname"), Some(&"Full Name is required"));
            assert_eq!(errors.get("age"), Some(&"Age is required"));
            assert_eq!(errors.get("gender"), Some(&"Gender is required"));
            assert_eq!(errors.get("password"), Some(&"Password is required"));
            assert_eq!(
                errors.get("confirmPassword"),
                Some(&"Confirm password is required")
            );
        }

        #[test]
        fn signup_email_message_differs_from_login() {
            let rules = RuleSet::signup();
            let mut f = valid_signup();
            f[0].1 = "nope".to_string();
            assert_eq!(
                rules.validate_field("email", f.as_slice()),
                Some("Email is invalid")
            );
        }

        #[test]
        fn fullname_rejects_non_letters() {
            let rules = RuleSet::signup();
            let mut f = valid_signup();
            f[1].1 = "Ada L0velace".to_string();
            assert_eq!(
                rules.validate_field("fullname", f.as_slice()),
                Some("Name can only contain letters and spaces")
            );
        }

        #[test]
        fn fullname_rejects_single_character() {
            let rules = RuleSet::signup();
            let mut f = valid_signup();
            f[1].1 = "A".to_string();
            assert_eq!(
                rules.validate_field("fullname", f.as_slice()),
                Some("Full name too short")
            );
        }

        #[test]
        fn age_boundaries() {
            let rules = RuleSet::signup();
            let mut f = valid_signup();

            // lower bound is exclusive at 18
            f[2].1 = "18".to_string();
            assert_eq!(
                rules.validate_field("age", f.as_slice()),
                Some("Age must be between 18 and 100")
            );

            f[2].1 = "19".to_string();
            assert_eq!(rules.validate_field("age", f.as_slice()), None);

            // upper bound is inclusive at 100
            f[2].1 = "100".to_string();
            assert_eq!(rules.validate_field("age", f.as_slice()), None);

            f[2].1 = "101".to_string();
            assert_eq!(
                rules.validate_field("age", f.as_slice()),
                Some("Age must be between 18 and 100")
            );
        }

        #[test]
        fn banned_word_beats_matching_pattern() {
            // "Password1!" satisfies the character pattern but contains a
            // banned substring, which is checked first
            let rules = RuleSet::signup();
            let mut f = valid_signup();
            f[4].1 = "Password1!".to_string();
            assert_eq!(
                rules.validate_field("password", f.as_slice()),
                Some("Password cannot contain organizational words")
            );
        }

        #[test]
        fn each_banned_word_is_rejected() {
            let rules = RuleSet::signup();
            for word in BANNED_WORDS {
                let mut f = valid_signup();
                f[4].1 = format!("Aa1!{word}");
                assert_eq!(
                    rules.validate_field("password", f.as_slice()),
                    Some("Password cannot contain organizational words"),
                    "expected rejection for {word}"
                );
            }
        }

        #[test]
        fn short_password_reported_before_pattern() {
            let rules = RuleSet::signup();
            let mut f = valid_signup();
            f[4].1 = "Ab1!".to_string();
            assert_eq!(
                rules.validate_field("password", f.as_slice()),
                Some("Password too short")
            );
        }

        #[test]
        fn confirm_password_must_match_current_password() {
            let rules = RuleSet::signup();
            let mut f = valid_signup();
            f[5].1 = "Different1!".to_string();
            assert_eq!(
                rules.validate_field("confirmPassword", f.as_slice()),
                Some("Passwords do not match")
            );

            f[5].1 = f[4].1.clone();
            assert_eq!(rules.validate_field("confirmPassword", f.as_slice()), None);
        }

        #[test]
        fn revalidating_a_fixed_field_clears_its_error() {
            let rules = RuleSet::signup();
            let mut f = valid_signup();
            f[0].1 = String::new();
            assert!(rules.validate_field("email", f.as_slice()).is_some());

            f[0].1 = "a@b.com".to_string();
            assert_eq!(rules.validate_field("email", f.as_slice()), None);
        }

        #[test]
        fn invalid_submit_scenario_collects_all_errors() {
            let rules = RuleSet::signup();
            let f = fields(&[
                ("email", ""),
                ("fullname", "A"),
                ("age", "17"),
                ("gender", ""),
                ("password", "weak"),
                ("confirmPassword", "mismatch"),
            ]);
            let errors = rules.validate_all(f.as_slice());
            assert_eq!(errors.len(), 6);
            assert_eq!(errors.get("email"), Some(&"Email is required"));
            assert_eq!(errors.get("fullname"), Some(&"Full name too short"));
            assert_eq!(errors.get("age"), Some(&"Age must be between 18 and 100"));
            assert_eq!(errors.get("gender"), Some(&"Gender is required"));
            assert_eq!(errors.get("password"), Some(&"Password too short"));
            assert_eq!(
                errors.get("confirmPassword"),
                Some(&"Passwords do not match")
            );
        }

        #[test]
        fn clean_signup_produces_empty_error_map() {
            let rules = RuleSet::signup();
            let f = valid_signup();
            assert!(rules.validate_all(f.as_slice()).is_empty());
        }

        #[test]
        fn unknown_field_has_no_rules_and_no_error() {
            let rules = RuleSet::signup();
            let f = valid_signup();
            assert_eq!(rules.validate_field("nickname", f.as_slice()), None);
        }
    }
}
