//! Validation error types

use std::fmt;

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent, null, or empty
    MissingField { field: &'static str },

    /// A partial update supplied none of the updatable fields
    NoUpdateFields { accepted: &'static [&'static str] },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing '{}' in request body", field),
            Self::NoUpdateFields { accepted } => {
                let fields = accepted
                    .iter()
                    .map(|field| format!("'{}'", field))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Request body must contain either {}", fields)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Take a required text field, treating empty strings like absent ones.
pub(crate) fn require_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    supplied_text(value).ok_or(ValidationError::MissingField { field })
}

/// Keep a text field only when it carries a non-empty value.
pub(crate) fn supplied_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
