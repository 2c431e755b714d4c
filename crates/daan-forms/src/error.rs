// File: src/error.rs
// Purpose: Errors for events that do not fit the page they are sent to
//
// A rejected field value is not an error here: it is recorded in the form
// state as a message. These are programming or script mistakes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("page {page} has no field named {field}")]
    UnknownField { page: &'static str, field: String },

    #[error("field {field} expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{value:?} is not an option of {field}")]
    UnknownOption { field: String, value: String },

    #[error("page {page} cannot switch to step {step}")]
    InvalidStep { page: &'static str, step: usize },
}
