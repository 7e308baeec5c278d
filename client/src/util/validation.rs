//! Field-level validation results shared by every form.
//!
//! DESIGN
//! ======
//! Schemas are declared on input structs with `validator` derives. This module
//! folds the validator's unordered error map into [`FieldErrors`], ordered by
//! the schema's field list, so forms render messages top to bottom and tests
//! can assert on exact sequences.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// One field-scoped validation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered list of field errors; at most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Record a failure for `field` unless it already has one.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push(FieldError { field, message: message.into() });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Fold validator output into schema order. Fields missing from `order`
    /// are dropped; only the first message per field is kept.
    pub fn from_validation(errors: &ValidationErrors, order: &[&'static str]) -> Self {
        let by_field = errors.field_errors();
        let mut out = Vec::new();
        for &field in order {
            let found = by_field.iter().find(|(name, _)| {
                let name: &str = name;
                name == field
            });
            let Some(first) = found.and_then(|(_, errs)| errs.first()) else {
                continue;
            };
            out.push(FieldError { field, message: message_of(first) });
        }
        Self(out)
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_deref()
        .map_or_else(|| error.code.to_string(), str::to_owned)
}

/// Build a `ValidationError` carrying a user-facing message.
pub fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Exactly one item selected; used for single-file inputs.
pub fn is_single<T>(items: &[T]) -> bool {
    items.len() == 1
}
