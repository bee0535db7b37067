//! Field validation rules

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Why a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("{label} not valid")]
    InvalidEmail { label: String },
    #[error("{label} should be at least {min} characters long.")]
    TooShort { label: String, min: usize },
}

/// A pure predicate over a field's current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    Required,
    /// Empty values pass; pair with `Required` to reject them
    Email,
    MinLength(usize),
}

impl ValidationRule {
    /// Check `value`, using `label` to build the error message
    pub fn check(&self, label: &str, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Required => {
                if value.trim().is_empty() {
                    return Err(ValidationError::Required {
                        label: label.to_string(),
                    });
                }
            }
            Self::Email => {
                let value = value.trim();
                if !value.is_empty() && !EMAIL_PATTERN.is_match(value) {
                    return Err(ValidationError::InvalidEmail {
                        label: label.to_string(),
                    });
                }
            }
            Self::MinLength(min) => {
                if value.chars().count() < *min {
                    return Err(ValidationError::TooShort {
                        label: label.to_string(),
                        min: *min,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Run `rules` in order and return the first failure
pub fn first_failure(
    rules: &[ValidationRule],
    label: &str,
    value: &str,
) -> Option<ValidationError> {
    rules.iter().find_map(|rule| rule.check(label, value).err())
}
