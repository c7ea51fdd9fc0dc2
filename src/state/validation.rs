//! Required-field checks for a single step

use super::forms::{FieldKind, Step};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// First failing field of a step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingRequired(String),
    #[error("field `{0}` is not a valid email address")]
    InvalidEmail(String),
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingRequired(name) | ValidationError::InvalidEmail(name) => name,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check required fields in order, stopping at the first failure
pub fn validate(step: &Step) -> Result<(), ValidationError> {
    for field in step.required_fields() {
        if field.is_empty() {
            return Err(ValidationError::MissingRequired(field.name.clone()));
        }
        if field.kind == FieldKind::Email && !is_valid_email(field.as_text()) {
            return Err(ValidationError::InvalidEmail(field.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FormField;

    fn step(fields: Vec<FormField>) -> Step {
        Step {
            position: 1,
            title: "Test".to_string(),
            fields,
        }
    }

    fn email(value: &str) -> FormField {
        let mut field = FormField::new(
            "contact",
            "Contact",
            FieldKind::Email,
            true,
            Vec::new(),
            String::new(),
        );
        field.set_text(value.to_string());
        field
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana @example.com"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_optional_fields_are_not_checked() {
        let s = step(vec![FormField::text("nickname", "Nickname")]);
        assert_eq!(validate(&s), Ok(()));
    }

    #[test]
    fn test_stops_at_first_missing_field() {
        let s = step(vec![
            FormField::text("name", "Name").required(),
            FormField::text("city", "City").required(),
        ]);
        assert_eq!(
            validate(&s),
            Err(ValidationError::MissingRequired("name".to_string()))
        );
    }

    #[test]
    fn test_invalid_email() {
        let s = step(vec![email("not-an-email")]);
        let err = validate(&s).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("contact".to_string()));
        assert_eq!(err.field(), "contact");
    }

    #[test]
    fn test_empty_email_is_missing_not_invalid() {
        let s = step(vec![email("")]);
        assert_eq!(
            validate(&s),
            Err(ValidationError::MissingRequired("contact".to_string()))
        );
    }

    #[test]
    fn test_unchecked_required_toggle_fails() {
        let toggle = FormField::new(
            "consent",
            "Consent",
            FieldKind::Toggle,
            true,
            Vec::new(),
            "yes".to_string(),
        );
        let s = step(vec![toggle]);
        assert!(validate(&s).is_err());
    }
}
