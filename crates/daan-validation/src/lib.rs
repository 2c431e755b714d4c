//! Daan Validation Rules
//!
//! Pure field rules shared by every signup and sign-in form. Each rule takes the
//! raw value collected by an input (and, for cross-field checks, a second value)
//! and returns a [`ValidationResult`]. Rules hold no state and never fail with
//! an `Err`: a rejected value is data, not an error.

use serde::{Deserialize, Serialize};

pub mod email;
pub mod file;
pub mod identity;
pub mod password;
pub mod string;

// Re-export all rules
pub use email::*;
pub use file::*;
pub use identity::*;
pub use password::*;
pub use string::*;

/// Outcome of running one rule against one value
///
/// `message` is empty when `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying the message shown under the field
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }

    /// The message, only when the value was rejected
    pub fn error(&self) -> Option<&str> {
        (!self.is_valid).then_some(self.message.as_str())
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(message) => Self::failure(message),
        }
    }
}
