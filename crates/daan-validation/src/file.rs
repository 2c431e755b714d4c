//! Upload validation (certificates, government ID scans)

use serde::{Deserialize, Serialize};

use crate::ValidationResult;

/// MIME types accepted for document uploads
pub const ALLOWED_FILE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "application/pdf"];

/// Largest accepted upload, 5 MiB
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// What the file picker hands back: the document itself is never read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

pub fn validate_file(file: Option<&FileMeta>, required: bool) -> ValidationResult {
    let Some(file) = file else {
        return if required {
            ValidationResult::failure("Please upload a file")
        } else {
            ValidationResult::success()
        };
    };

    if !ALLOWED_FILE_TYPES.contains(&file.mime_type.as_str()) {
        return ValidationResult::failure("Please upload a valid file (JPG, PNG, or PDF)");
    }
    if file.size > MAX_FILE_SIZE {
        return ValidationResult::failure("File size must be less than 5MB");
    }
    ValidationResult::success()
}
