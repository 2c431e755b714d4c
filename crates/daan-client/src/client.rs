// File: src/client.rs
// Purpose: HTTP client for the Daan auth API

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ClientError, DEFAULT_REJECTION};
use crate::request::{AuthResponse, DonorSignupRequest, ErrorBody};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_SIGNUP_PATH: &str = "/api/auth/signup/donor";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the signup endpoint lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub signup_path: String,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            signup_path: DEFAULT_SIGNUP_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientSettings {
    pub fn signup_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.signup_path
        )
    }
}

#[derive(Debug, Clone)]
pub struct DaanClient {
    http: Client,
    signup_url: String,
}

impl DaanClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self {
            http,
            signup_url: settings.signup_url(),
        })
    }

    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }

    /// Create a donor account
    ///
    /// A non-2xx status becomes [`ClientError::Rejected`] carrying the
    /// body's `error` text, or a generic message when there is none.
    pub async fn signup_donor(
        &self,
        request: &DonorSignupRequest,
    ) -> Result<AuthResponse, ClientError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, url = %self.signup_url, "posting donor signup");

        let response = self
            .http
            .post(&self.signup_url)
            .header("x-request-id", request_id.to_string())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let auth: AuthResponse = serde_json::from_str(&body).map_err(ClientError::Decode)?;
        info!(%request_id, status = status.as_u16(), "donor signup accepted");
        Ok(auth)
    }
}
