//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationResult;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_ACCESS_CODE_LENGTH: usize = 6;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));

// Optional scheme, domain with a 2-6 character tld, optional path
static WEBSITE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?[0-9a-z.-]+\.[a-z.]{2,6}[/A-Za-z0-9_ .-]*/?$")
        .expect("website pattern compiles")
});

/// Person or organisation name: letters and spaces, at least two characters
pub fn validate_name(name: &str) -> ValidationResult {
    if name.is_empty() {
        return ValidationResult::failure("Name is required");
    }
    if name.chars().count() < MIN_NAME_LENGTH {
        return ValidationResult::failure("Name must be at least 2 characters long");
    }
    if !NAME_REGEX.is_match(name) {
        return ValidationResult::failure("Name can only contain letters and spaces");
    }
    ValidationResult::success()
}

/// Generic required field; `field_name` is the label shown to the user
pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    if value.trim().is_empty() {
        ValidationResult::failure(format!("{} is required", field_name))
    } else {
        ValidationResult::success()
    }
}

pub fn is_valid_website(url: &str) -> bool {
    WEBSITE_REGEX.is_match(url)
}

/// Optional website: empty passes, scheme may be omitted
pub fn validate_website(url: &str) -> ValidationResult {
    if url.is_empty() || is_valid_website(url) {
        ValidationResult::success()
    } else {
        ValidationResult::failure("Please enter a valid website URL")
    }
}

pub fn validate_access_code(code: &str) -> ValidationResult {
    if code.is_empty() {
        return ValidationResult::failure("Access code is required");
    }
    if code.chars().count() < MIN_ACCESS_CODE_LENGTH {
        return ValidationResult::failure("Access code must be at least 6 characters long");
    }
    ValidationResult::success()
}
