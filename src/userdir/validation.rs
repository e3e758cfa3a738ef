//! Form validation for drafts.
//!
//! Rules:
//! - `name` must be non-empty and contain no digit
//! - `lastname` must be non-empty and contain no digit
//! - `phone` is free text and always accepted

use crate::model::DraftUser;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_ERROR: &str = "Name cannot be empty and must not contain numbers.";
pub const LASTNAME_ERROR: &str = "Last name cannot be empty and must not contain numbers.";

// ASCII digits only; `\d` in the regex crate would also match other scripts' digits.
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").expect("valid digit pattern"));

/// Per-field error messages. An empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: String,
    pub lastname: String,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.lastname.is_empty()
    }

    /// Non-empty messages, in field order.
    pub fn messages(&self) -> Vec<&str> {
        [self.name.as_str(), self.lastname.as_str()]
            .into_iter()
            .filter(|m| !m.is_empty())
            .collect()
    }
}

/// Outcome of validating a draft: the validity flag and the parallel messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: ValidationErrors,
}

/// Validates a draft.
///
/// # Examples
/// ```
/// use userdir::model::DraftUser;
/// use userdir::validation::validate_draft;
///
/// assert!(validate_draft(&DraftUser::new("Ana", "Ruiz", "555")).valid);
///
/// let outcome = validate_draft(&DraftUser::new("Ana1", "Ruiz", "555"));
/// assert!(!outcome.valid);
/// assert!(!outcome.errors.name.is_empty());
/// assert!(outcome.errors.lastname.is_empty());
/// ```
pub fn validate_draft(draft: &DraftUser) -> Validation {
    let errors = ValidationErrors {
        name: check_text(&draft.name, NAME_ERROR),
        lastname: check_text(&draft.lastname, LASTNAME_ERROR),
    };
    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

fn check_text(value: &str, message: &str) -> String {
    if value.is_empty() || DIGIT.is_match(value) {
        message.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, lastname: &str) -> DraftUser {
        DraftUser::new(name, lastname, "555")
    }

    #[test]
    fn accepts_plain_names() {
        let outcome = validate_draft(&draft("Ana", "Ruiz"));
        assert!(outcome.valid);
        assert_eq!(outcome.errors, ValidationErrors::default());
    }

    #[test]
    fn accepts_accents_spaces_and_punctuation() {
        assert!(validate_draft(&draft("José María", "Núñez-O'Brien")).valid);
    }

    #[test]
    fn rejects_digit_in_name_only() {
        let outcome = validate_draft(&draft("Ana1", "Ruiz"));
        assert!(!outcome.valid);
        assert_eq!(outcome.errors.name, NAME_ERROR);
        assert_eq!(outcome.errors.lastname, "");
    }

    #[test]
    fn rejects_digit_in_lastname_only() {
        let outcome = validate_draft(&draft("Ana", "R2uiz"));
        assert!(!outcome.valid);
        assert_eq!(outcome.errors.name, "");
        assert_eq!(outcome.errors.lastname, LASTNAME_ERROR);
    }

    #[test]
    fn rejects_empty_fields() {
        let outcome = validate_draft(&DraftUser::default());
        assert!(!outcome.valid);
        assert_eq!(outcome.errors.messages(), vec![NAME_ERROR, LASTNAME_ERROR]);
    }

    #[test]
    fn whitespace_only_is_not_empty() {
        assert!(validate_draft(&draft(" ", " ")).valid);
    }

    #[test]
    fn phone_is_never_checked() {
        assert!(validate_draft(&DraftUser::new("Ana", "Ruiz", "")).valid);
        assert!(validate_draft(&DraftUser::new("Ana", "Ruiz", "abc")).valid);
    }

    #[test]
    fn non_ascii_digits_are_accepted() {
        // Arabic-Indic digit three
        assert!(validate_draft(&draft("Ana\u{0663}", "Ruiz")).valid);
    }
}
