// File: src/submit.rs
// Purpose: Side effects of an accepted form submission

use std::sync::Arc;

use tracing::{error, info};

use daan_forms::{Navigator, PageKind, Route, Submission};

use crate::client::DaanClient;
use crate::error::ClientError;
use crate::request::DonorSignupRequest;
use crate::session::{Session, SessionStore};

/// What happened to a submission
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Account created and session stored
    SignedUp(Session),
    /// No backend call for this page; the submission was only logged
    Logged,
}

/// Performs the work behind a form's `Submit` effect
///
/// Donor signups go to the API and, once accepted, the session is stored and
/// the dashboard is requested. Every other page is logged and accepted.
#[derive(Clone)]
pub struct SubmissionHandler {
    client: DaanClient,
    sessions: Arc<dyn SessionStore>,
}

impl SubmissionHandler {
    pub fn new(client: DaanClient, sessions: Arc<dyn SessionStore>) -> Self {
        Self { client, sessions }
    }

    pub async fn handle(
        &self,
        submission: &Submission,
        navigator: &dyn Navigator,
    ) -> Result<Outcome, ClientError> {
        if submission.page != PageKind::Donor {
            info!(
                page = %submission.page,
                step = submission.step.unwrap_or("-"),
                fields = submission.values.len(),
                "form submitted"
            );
            return Ok(Outcome::Logged);
        }

        match self.sign_up_donor(submission).await {
            Ok(session) => {
                navigator.navigate(Route::Dashboard);
                Ok(Outcome::SignedUp(session))
            }
            Err(err) => {
                error!(page = %submission.page, error = %err, "signup failed");
                Err(err)
            }
        }
    }

    async fn sign_up_donor(&self, submission: &Submission) -> Result<Session, ClientError> {
        let request = DonorSignupRequest::try_from(submission)?;
        let auth = self.client.signup_donor(&request).await?;

        let session = Session::from_auth(auth);
        self.sessions.save(&session).await?;
        info!(store = self.sessions.name(), "session saved");
        Ok(session)
    }
}
