//! Password validation functions

use crate::ValidationResult;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character requirement
pub const SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// Validates password strength
///
/// 8+ characters with a lowercase letter, an uppercase letter, a digit and one
/// of `@$!%*?&`. Checks run in that order and the first failure is reported.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::failure("Password is required");
    }

    let checks = [
        (
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one number",
        ),
        (
            password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
            "Password must contain at least one special character (@$!%*?&)",
        ),
    ];

    checks
        .iter()
        .find(|(valid, _)| !valid)
        .map(|(_, msg)| ValidationResult::failure(*msg))
        .unwrap_or_else(ValidationResult::success)
}

/// Confirmation must be present and match the paired password exactly
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> ValidationResult {
    if confirm_password.is_empty() {
        return ValidationResult::failure("Please confirm your password");
    }
    if password != confirm_password {
        return ValidationResult::failure("Passwords do not match");
    }
    ValidationResult::success()
}
