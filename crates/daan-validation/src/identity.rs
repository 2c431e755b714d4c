//! Mobile number and PAN validation
//!
//! Both come in two flavours. The plain rule accepts an empty value so roles
//! that treat the field as optional can still check whatever was typed; the
//! `required` wrapper rejects empty input first and then defers to it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationResult;

// Ten digit mobile number starting with 6-9
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern compiles"));

// AAAAA9999A, matched against the uppercased input
static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern compiles"));

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

pub fn is_valid_pan(pan: &str) -> bool {
    PAN_REGEX.is_match(&pan.to_uppercase())
}

/// Optional mobile number: empty passes
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() || is_valid_phone(phone) {
        ValidationResult::success()
    } else {
        ValidationResult::failure("Please enter a valid 10-digit mobile number")
    }
}

pub fn validate_required_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::failure("Phone number is required");
    }
    validate_phone(phone)
}

/// Optional PAN: empty passes, case-insensitive otherwise
pub fn validate_pan(pan: &str) -> ValidationResult {
    if pan.is_empty() || is_valid_pan(pan) {
        ValidationResult::success()
    } else {
        ValidationResult::failure("Please enter a valid PAN number (e.g., ABCDE1234F)")
    }
}

pub fn validate_required_pan(pan: &str) -> ValidationResult {
    if pan.is_empty() {
        return ValidationResult::failure("PAN number is required");
    }
    validate_pan(pan)
}
