// File: src/request.rs
// Purpose: Wire types for the signup endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use daan_forms::{PageKind, Submission};

use crate::error::ClientError;

/// Body of `POST /api/auth/signup/donor`
///
/// Optional fields left empty in the form are omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorSignupRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_card: Option<String>,
}

impl TryFrom<&Submission> for DonorSignupRequest {
    type Error = ClientError;

    fn try_from(submission: &Submission) -> Result<Self, Self::Error> {
        if submission.page != PageKind::Donor {
            return Err(ClientError::UnsupportedPage(submission.page));
        }

        Ok(Self {
            full_name: submission.text("fullName").to_string(),
            email: submission.text("email").to_string(),
            phone: submission.optional_text("phone"),
            password: submission.text("password").to_string(),
            pan_card: submission.optional_text("panCard"),
        })
    }
}

/// Successful signup: bearer token plus the created user record
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Value,
}

/// Shape of an error answer; every field may be missing
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
