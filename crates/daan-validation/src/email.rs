//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationResult;

// local@domain.tld, no whitespace and a single '@'
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Required email field
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::failure("Email is required");
    }
    if !is_valid_email(email) {
        return ValidationResult::failure("Please enter a valid email address");
    }
    ValidationResult::success()
}
