//! Validation error types for the domain layer
//!
//! Every validation pass collects all of its failures into one
//! [`ValidationErrors`] value instead of stopping at the first one.
//! Equipment slots nest their own failures under
//! [`ValidationError::NestedValidationFailure`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Field name used when the whole input is the wrong shape.
pub const ROOT_FIELD: &str = "__root__";

/// Why a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameViolation {
    /// Empty, or made of spaces only
    Empty,
    /// Contains something other than letters and spaces
    NonAlphabetic { offending: char },
    /// Longer than the configured cap
    TooLong { max: usize, actual: usize },
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name cannot be empty"),
            Self::NonAlphabetic { offending } => write!(
                f,
                "name must be only letters and spaces (found {:?})",
                offending
            ),
            Self::TooLong { max, actual } => write!(
                f,
                "name cannot exceed {} characters (got {})",
                max, actual
            ),
        }
    }
}

/// A single field-level validation failure.
///
/// Every variant names the field it belongs to. Nested failures carry the
/// equipment slot instead and hold the inner failures of that slot.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field is absent or `null`
    #[error("{field}: field required")]
    MissingField { field: String },

    /// The field holds the wrong kind of JSON value
    #[error("{field}: expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    /// The value is not a member of the field's literal set
    #[error("{field}: {value:?} is not one of [{}]", .allowed.join(", "))]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A numeric attribute is below zero
    #[error("{field}: {value} is negative, value must be 0 or greater")]
    NegativeValueNotAllowed { field: String, value: f64 },

    /// A name breaks the letters-and-spaces rule
    #[error("{field}: {reason}")]
    InvalidName {
        field: String,
        reason: NameViolation,
    },

    /// An item has no type, or a type outside its literal set
    #[error("{field}: {} (allowed: [{}])", describe_type(.value), .allowed.join(", "))]
    MissingOrInvalidType {
        field: String,
        value: Option<String>,
        allowed: &'static [&'static str],
    },

    /// An equipment slot holds an item that failed its own validation
    #[error("{slot}: {} invalid field(s) in equipped item", .errors.len())]
    NestedValidationFailure {
        slot: String,
        errors: Vec<ValidationError>,
    },
}

fn describe_type(value: &Option<String>) -> String {
    match value {
        Some(value) => format!("invalid type {:?}", value),
        None => "no type specified".to_string(),
    }
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
        }
    }

    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        Self::NegativeValueNotAllowed {
            field: field.into(),
            value,
        }
    }

    pub fn invalid_name(field: impl Into<String>, reason: NameViolation) -> Self {
        Self::InvalidName {
            field: field.into(),
            reason,
        }
    }

    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::WrongType { .. } => "wrong_type",
            Self::InvalidEnumValue { .. } => "invalid_enum_value",
            Self::NegativeValueNotAllowed { .. } => "negative_value_not_allowed",
            Self::InvalidName { .. } => "invalid_name",
            Self::MissingOrInvalidType { .. } => "missing_or_invalid_type",
            Self::NestedValidationFailure { .. } => "nested_validation_failure",
        }
    }

    /// The field (or slot, for nested failures) this error is attached to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::WrongType { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::NegativeValueNotAllowed { field, .. }
            | Self::InvalidName { field, .. }
            | Self::MissingOrInvalidType { field, .. } => field,
            Self::NestedValidationFailure { slot, .. } => slot,
        }
    }
}

/// Every failure found during one validation pass.
///
/// Never empty when returned from a validator.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Flattens nested slot failures into `(path, error)` pairs.
    ///
    /// The path of a leaf inside a slot is `slot.field`, e.g. `helmet.name`.
    pub fn leaves(&self) -> Vec<(String, &ValidationError)> {
        let mut out = Vec::new();
        collect_leaves("", &self.0, &mut out);
        out
    }
}

fn collect_leaves<'a>(
    prefix: &str,
    errors: &'a [ValidationError],
    out: &mut Vec<(String, &'a ValidationError)>,
) {
    for error in errors {
        let path = format!("{}{}", prefix, error.field());
        match error {
            ValidationError::NestedValidationFailure { errors, .. } => {
                collect_leaves(&format!("{}.", path), errors, out);
            }
            _ => out.push((path, error)),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaves = self.leaves();
        write!(f, "{} validation error(s)", leaves.len())?;
        for (path, error) in leaves {
            let message = error.to_string();
            // Leaf messages start with their own field name; swap in the full path.
            let detail = message
                .strip_prefix(error.field())
                .and_then(|rest| rest.strip_prefix(": "))
                .unwrap_or(&message);
            write!(f, "\n  {}: {}", path, detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
